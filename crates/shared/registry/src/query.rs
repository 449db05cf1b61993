//! Pure queries over modules and a caller-supplied override map.
//!
//! Overrides arrive loosely typed (configuration files, environment, user preferences)
//! and are narrowed once by [`normalize_module_overrides`]. Everything past that
//! boundary works with the closed [`ModuleOverrides`] map.

use fhub_domain::{Module, ModuleId, ModuleMessages, ModuleOverrides, NavItem};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Override for `module` if present, otherwise its default.
#[must_use]
pub fn is_module_enabled(module: &Module, overrides: Option<&ModuleOverrides>) -> bool {
    overrides
        .and_then(|o| o.get(&module.id).copied())
        .unwrap_or(module.enabled_by_default)
}

/// Narrows a raw string-keyed map to the boolean entries naming a known module.
///
/// Values are never coerced: `"true"`, `1` or `null` are dropped the same way an
/// unknown key is. Returns `None` for a missing map or when nothing survives.
#[must_use]
pub fn normalize_module_overrides(raw: Option<&Map<String, Value>>) -> Option<ModuleOverrides> {
    let raw = raw?;

    let mut overrides = ModuleOverrides::new();
    for (key, value) in raw {
        let Value::Bool(enabled) = value else {
            tracing::debug!(key = %key, value = %value, "Dropping non-boolean module override");
            continue;
        };
        match ModuleId::from_str(key) {
            Ok(id) => {
                overrides.insert(id, *enabled);
            }
            Err(_) => tracing::debug!(key = %key, "Dropping override for unknown module"),
        }
    }

    (!overrides.is_empty()).then_some(overrides)
}

/// Message bundles of every module that defines them, in input order.
pub fn collect_module_messages<'a>(
    modules: impl IntoIterator<Item = &'a Module>,
) -> Vec<&'a ModuleMessages> {
    modules.into_iter().filter_map(|m| m.messages.as_ref()).collect()
}

/// Navigation entries of every module that defines one, in input order.
pub fn collect_nav_items<'a>(modules: impl IntoIterator<Item = &'a Module>) -> Vec<&'a NavItem> {
    modules.into_iter().filter_map(|m| m.nav.as_ref()).collect()
}
