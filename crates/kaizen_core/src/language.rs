//! Report languages.

use serde::{Deserialize, Serialize};

/// Languages the instruction templates and report vocabulary exist in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[display("en")]
    En,
    /// Japanese
    #[display("ja")]
    Ja,
    /// Vietnamese
    #[display("vi")]
    Vi,
}

impl Default for Language {
    fn default() -> Self {
        Language::Ja
    }
}
