use std::fmt;

use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Sentinel value the wire format uses for auto-detection
pub const AUTO_LANGUAGE: &str = "auto";

/// Source-side language selection. The target side is a bare
/// `LanguageCode`, so auto-detect is unrepresentable there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLanguage {
    Auto,
    Code(LanguageCode),
}

impl SourceLanguage {
    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }

    /// Concrete code, or `None` for auto-detect
    pub fn code(&self) -> Option<&LanguageCode> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Code(code) => Some(code),
        }
    }
}

impl From<String> for SourceLanguage {
    fn from(value: String) -> Self {
        if value == AUTO_LANGUAGE {
            SourceLanguage::Auto
        } else {
            SourceLanguage::Code(value)
        }
    }
}

impl From<SourceLanguage> for String {
    fn from(value: SourceLanguage) -> Self {
        match value {
            SourceLanguage::Auto => AUTO_LANGUAGE.to_string(),
            SourceLanguage::Code(code) => code,
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLanguage::Auto => f.write_str(AUTO_LANGUAGE),
            SourceLanguage::Code(code) => f.write_str(code),
        }
    }
}
