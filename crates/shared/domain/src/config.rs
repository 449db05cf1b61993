use crate::locale::Locale;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub modules: ModulesConfig,
    pub i18n: I18nConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Module enablement input.
///
/// `overrides` is kept loosely typed on purpose: values come from user or
/// organization settings and are only trusted after normalization.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    pub overrides: Map<String, Value>,
}

/// Locale selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub locale: Locale,
    pub fallback_locale: Locale,
}

/// Logging output knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra `EnvFilter` directives (e.g. `fhub_registry=debug`).
    pub filter: Option<String>,
    /// When set, logs are also written to rolling files in this directory.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for I18nConfig {
    fn default() -> Self {
        Self { locale: Locale::PRIMARY, fallback_locale: Locale::FALLBACK }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
