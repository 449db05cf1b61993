use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Locales the UI ships message bundles for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Locale {
    #[serde(rename = "en-US")]
    #[strum(serialize = "en-US")]
    EnUs,
    #[serde(rename = "zh-CN")]
    #[strum(serialize = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Locale the UI starts in when nothing else is configured.
    pub const PRIMARY: Self = Self::ZhCn;
    /// Locale consulted when a key is missing from the active bundle.
    pub const FALLBACK: Self = Self::EnUs;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
