use fhub_domain::ModuleId;
use std::borrow::Cow;

/// Errors raised while building a registry. Queries never fail.
#[fhub_derive::fhub_error]
pub enum RegistryError {
    /// Two settings pages share a key; keys double as child route paths.
    #[error("Duplicate settings page key{}: {key}", format_context(.context))]
    DuplicateSettingsPage { key: String, context: Option<Cow<'static, str>> },

    #[error("Module registered twice{}: {id}", format_context(.context))]
    DuplicateModule { id: ModuleId, context: Option<Cow<'static, str>> },

    /// The `settings` module is produced by aggregation and cannot be registered directly.
    #[error("Reserved module id{}: {id}", format_context(.context))]
    ReservedModule { id: ModuleId, context: Option<Cow<'static, str>> },

    #[error("Registry already initialized{}", format_context(.context))]
    AlreadyInitialized { context: Option<Cow<'static, str>> },
}
