//! Kernel utilities shared across modules.
//! Keep this crate lightweight; it holds the helpers every module and app reaches for:
//! config loading, message catalogs, declarative field validation and date parsing.
//!
//! ## Message catalogs
//! ```rust
//! use fhub_kernel::i18n::convert_placeholders;
//! use serde_json::json;
//!
//! let converted = convert_placeholders(&json!({ "greeting": "Hello {{- name}}" }));
//! assert_eq!(converted, json!({ "greeting": "Hello {name}" }));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use fhub_kernel::config::load_config;
//! let cfg: fhub_kernel::domain::config::AppConfig = load_config(Some("fhub")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod date;
pub mod i18n;
pub mod validation;

pub use fhub_domain as domain;
