#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! Only one macro lives here today: [`fhub_error`], which turns a plain enum into a
//! `thiserror` error type with context support. Every library crate declares its
//! error enum through it so that error messages and `.context(...)` chaining look
//! the same everywhere.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * A `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`, and for
///   `Result<T, Source>` of every variant that wraps a `source` error.
/// * `From<Source>` for every variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper to be used in `#[error(...)]` strings.
///
/// # Requirements
///
/// * Variants must use named fields. Tuple and unit variants are rejected.
/// * A variant with a `source` field (or a field marked `#[source]`) must also
///   carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fhub_derive::fhub_error]
/// pub enum LoadError {
///     #[error("Parse error{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(raw: &str) -> Result<serde_json::Value, LoadError> {
///     serde_json::from_str(raw).context("Reading module manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn fhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
