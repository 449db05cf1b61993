//! # Domain Models
//!
//! Pure descriptor types for the application's feature modules: ids, navigation
//! entries, routes, settings pages, localized message bundles and the override map
//! used to toggle modules at runtime.
//!
//! Keep it lean: no I/O, networking, or logging, just data and simple helpers.
//! Composition and queries live in `fhub-registry`.

pub mod config;
pub mod locale;
pub mod module;
pub mod module_set;

pub use crate::locale::Locale;
pub use crate::module::{
    ComponentRef, Icon, MessageBundle, Module, ModuleId, ModuleMessages, ModuleOverrides, NavItem,
    Route, RouteMeta, RouteTarget, SettingsPage,
};
pub use crate::module_set::ModuleSet;
