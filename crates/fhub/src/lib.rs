//! Facade crate for `FreelanceHub` modules and shared crates.
//! Re-exports domain/kernel/registry primitives and owns the process-wide registry.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] once at startup; it builds the registry from the core modules and
//!   every feature module compiled in (by Cargo feature).
//! - Read it back anywhere with [`registry`]. Tests that need a custom module list
//!   build their own [`Registry`] instead.

pub use fhub_domain as domain;
pub use fhub_kernel as kernel;
pub use fhub_registry::{Registry, RegistryError, catalog, query, router, settings};

use fhub_domain::Module;
use std::sync::OnceLock;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Feature modules compiled into this build.
pub mod features {
    #[cfg(feature = "finance")]
    pub use fhub_finance as finance;

    /// Build-time enabled feature modules (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "finance")]
        "finance",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Feature modules in registration order.
#[must_use]
#[allow(unused_mut)]
pub fn feature_modules() -> Vec<Module> {
    let mut modules = Vec::new();

    #[cfg(feature = "finance")]
    modules.push(features::finance::module());

    modules
}

/// Assembles a fresh registry from the core and compiled-in feature modules.
///
/// # Errors
/// Returns an error if the module descriptors violate the registry rules.
pub fn build() -> Result<Registry, RegistryError> {
    Registry::assemble(catalog::base_modules(), feature_modules())
}

/// Builds the process-wide registry. Call once at startup.
///
/// # Errors
/// - [`RegistryError::AlreadyInitialized`] on any call after the first success.
/// - Any assembly error from [`build`].
pub fn init() -> Result<&'static Registry, RegistryError> {
    if REGISTRY.get().is_some() {
        return Err(RegistryError::AlreadyInitialized { context: None });
    }

    let built = build()?;
    let len = built.len();

    // Two racing callers both reach here; only one value is stored.
    REGISTRY.set(built).map_err(|_| RegistryError::AlreadyInitialized {
        context: Some("concurrent init".into()),
    })?;
    tracing::info!(modules = len, features = ?features::ENABLED, "Module registry initialized");

    REGISTRY.get().ok_or(RegistryError::AlreadyInitialized { context: None })
}

/// The process-wide registry, if [`init`] has run.
#[must_use]
pub fn registry() -> Option<&'static Registry> {
    REGISTRY.get()
}
