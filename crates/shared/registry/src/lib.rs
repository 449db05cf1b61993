//! # Module Registry
//!
//! Composes the application's feature modules into one ordered, immutable
//! [`Registry`] and answers questions about it.
//!
//! ## Architecture
//!
//! 1.  **Settings Aggregation ([`settings`]):** merges the core settings pages with the
//!     pages other modules contribute into the composite `settings` module.
//! 2.  **Assembly ([`Registry::assemble`]):** concatenates base and feature modules in
//!     declaration order and appends the aggregated settings module last.
//! 3.  **Queries ([`query`]):** pure functions over the registry and an override map:
//!     lookup, enablement, and collection of nav items and messages.
//! 4.  **Route records ([`router`]):** the router-facing form of module routes.
//!
//! The built-in descriptors for the core modules live in [`catalog`]. Feature crates
//! (finance, ...) export their own [`Module`](fhub_domain::Module) values and are
//! composed by the facade crate.
//!
//! ## Example
//!
//! ```rust
//! use fhub_domain::ModuleId;
//! use fhub_registry::{Registry, catalog};
//!
//! let registry = Registry::assemble(catalog::base_modules(), Vec::new()).unwrap();
//! assert_eq!(registry.modules().last().map(|m| m.id), Some(ModuleId::Settings));
//! assert!(registry.is_id_enabled(ModuleId::Reports, None));
//! ```

pub mod catalog;
mod error;
pub mod query;
mod registry;
pub mod router;
pub mod settings;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::registry::Registry;
