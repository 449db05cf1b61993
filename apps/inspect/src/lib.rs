//! # FreelanceHub Inspector
//!
//! Loads the application configuration, builds the module registry and prints
//! registry views as JSON. Each view is a pure function of the registry, the
//! effective overrides and the locale settings, so the same functions back the
//! binary and its tests.
//!
//! ## Example
//! ```rust
//! use fhub_inspect::report;
//!
//! let registry = fhub::build().unwrap();
//! let nav = report::nav(&registry, None, &Default::default());
//! assert!(nav.as_array().is_some_and(|items| !items.is_empty()));
//! ```

pub mod args;
pub mod report;

use crate::args::{Cli, Command, GlobalArgs, SchemaName};
use anyhow::{Context, Result};
use fhub::domain::ModuleOverrides;
use fhub::domain::config::AppConfig;
use fhub::kernel::validation::{self, Schema};
use fhub::query::normalize_module_overrides;
use serde_json::{Map, Value};
use std::io::Write;

/// Effective overrides: configured values first, then command-line flags.
///
/// Flags are merged into the raw map before normalization so a single rule decides
/// what counts as an override.
#[must_use]
pub fn effective_overrides(config: &AppConfig, global: &GlobalArgs) -> Option<ModuleOverrides> {
    let mut raw: Map<String, Value> = config.modules.overrides.clone();
    for id in &global.enable {
        raw.insert(id.to_string(), Value::Bool(true));
    }
    for id in &global.disable {
        raw.insert(id.to_string(), Value::Bool(false));
    }
    normalize_module_overrides(Some(&raw))
}

#[must_use]
pub const fn schema(name: SchemaName) -> fn() -> Schema {
    match name {
        SchemaName::Client => validation::client,
        SchemaName::Project => validation::project,
        SchemaName::TimeEntry => validation::time_entry,
        SchemaName::Invoice => validation::invoice,
        SchemaName::Login => validation::login,
        SchemaName::RegisterProfile => validation::register_profile,
        SchemaName::RegisterPassword => validation::register_password,
        SchemaName::RegisterPreferences => validation::register_preferences,
    }
}

/// Runs one subcommand and writes its JSON output to `out`.
///
/// Returns whether the command succeeded; only `validate` can report failure
/// without an error.
///
/// # Errors
/// Returns an error if registry initialization, file access, or output fails.
pub fn run(cli: &Cli, config: &AppConfig, out: &mut impl Write) -> Result<bool> {
    let registry = fhub::init().context("Failed to initialize module registry")?;
    let overrides = effective_overrides(config, &cli.global);
    tracing::debug!(?overrides, "Effective module overrides");

    let (value, ok) = match &cli.command {
        Command::Modules => (report::modules(registry, overrides.as_ref()), true),
        Command::Nav => (report::nav(registry, overrides.as_ref(), &config.i18n), true),
        Command::Routes { flat } => (report::routes(registry, overrides.as_ref(), *flat), true),
        Command::Settings => (report::settings(registry), true),
        Command::Messages { locale, all } => {
            let locale = (!*all).then(|| locale.unwrap_or(config.i18n.locale));
            (report::messages(registry, overrides.as_ref(), locale), true)
        }
        Command::Validate { schema: name, file } => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let document: Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            let violations = schema(*name)().violations(&document);
            let ok = violations.is_empty();
            (report::validation(&violations), ok)
        }
    };

    if cli.global.compact {
        serde_json::to_writer(&mut *out, &value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &value)?;
    }
    writeln!(out)?;

    Ok(ok)
}
