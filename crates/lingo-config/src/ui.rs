use lingo_core::language::LanguageCode;
use serde::{Deserialize, Serialize};

fn default_target() -> LanguageCode {
    "en".to_string()
}

fn default_languages() -> Vec<LanguageOption> {
    [
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ja", "Japanese"),
        ("zh", "Chinese"),
    ]
    .into_iter()
    .map(|(code, name)| LanguageOption {
        code: code.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Entry of the language selector list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: LanguageCode,
    pub name: String,
}

/// Presentation-side configuration. The supported-language set lives here,
/// outside the core; the reducer never validates codes itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_target")]
    pub default_target: LanguageCode,
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageOption>,
}

impl UiConfig {
    pub fn supports(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_target: default_target(),
            languages: default_languages(),
        }
    }
}
