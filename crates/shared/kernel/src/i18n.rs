//! Message catalog helpers.
//!
//! Module bundles are merged per locale into one catalog the UI's i18n provider
//! consumes. Third-party bundles written with double-brace placeholders
//! (`{{param}}`, `{{- param}}`) are rewritten to the single-brace `{param}` form
//! before they are merged.

use fhub_domain::{Locale, MessageBundle, ModuleMessages};
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Merged message trees, one per locale.
pub type Catalog = BTreeMap<Locale, MessageBundle>;

// `{{ - name }}` and `{{name}}` both capture `name`; surrounding whitespace is dropped.
#[allow(clippy::expect_used)]
static DOUBLE_BRACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(?:-\s*)?([^}]+?)\s*\}\}").expect("placeholder pattern is valid")
});

/// Rewrites double-brace placeholders in a single string.
#[must_use]
pub fn convert_text(text: &str) -> String {
    DOUBLE_BRACE.replace_all(text, "{$1}").into_owned()
}

/// Walks a message tree and rewrites every string leaf.
///
/// Objects and arrays are walked recursively; numbers, booleans and nulls are
/// returned untouched.
#[must_use]
pub fn convert_placeholders(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(convert_text(text)),
        Value::Object(map) => Value::Object(convert_bundle(map)),
        Value::Array(items) => Value::Array(items.iter().map(convert_placeholders).collect()),
        other => other.clone(),
    }
}

/// [`convert_placeholders`] for a whole bundle.
#[must_use]
pub fn convert_bundle(bundle: &MessageBundle) -> MessageBundle {
    bundle.iter().map(|(key, value)| (key.clone(), convert_placeholders(value))).collect()
}

/// Merges module bundles per locale.
///
/// Top-level keys are merged in iteration order; a later bundle's key replaces an
/// earlier one. Nested trees are replaced wholesale, not deep-merged.
pub fn merge_catalog<'a>(bundles: impl IntoIterator<Item = &'a ModuleMessages>) -> Catalog {
    let mut catalog = Catalog::new();
    for messages in bundles {
        for (locale, bundle) in messages {
            let target = catalog.entry(*locale).or_default();
            for (key, value) in bundle {
                if target.insert(key.clone(), value.clone()).is_some() {
                    tracing::debug!(locale = %locale, key = %key, "Message key overridden");
                }
            }
        }
    }
    catalog
}

/// Resolves a dotted key (`nav.finance`) in `locale`, then in `fallback`.
#[must_use]
pub fn lookup<'a>(catalog: &'a Catalog, locale: Locale, fallback: Locale, key: &str) -> Option<&'a str> {
    resolve(catalog.get(&locale), key).or_else(|| resolve(catalog.get(&fallback), key))
}

fn resolve<'a>(bundle: Option<&'a MessageBundle>, key: &str) -> Option<&'a str> {
    let bundle = bundle?;
    // Flat keys containing dots win over nested traversal.
    if let Some(text) = bundle.get(key).and_then(Value::as_str) {
        return Some(text);
    }

    let mut segments = key.split('.');
    let mut node = bundle.get(segments.next()?)?;
    for segment in segments {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}
