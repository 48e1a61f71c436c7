use serde::{Deserialize, Serialize};

use crate::language::{LanguageCode, SourceLanguage};
use crate::types::StateEvent;

/// Snapshot of the translation session. Mutated only through [`TranslationState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationState {
    pub source_language: SourceLanguage,
    pub target_language: LanguageCode,
    pub input_text: String,
    pub result_text: String,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl TranslationState {
    pub fn new(target_language: LanguageCode) -> Self {
        Self {
            source_language: SourceLanguage::Auto,
            target_language,
            input_text: String::new(),
            result_text: String::new(),
            is_loading: false,
            last_error: None,
        }
    }

    /// Total reducer: every event maps to a valid successor state, no panics.
    ///
    /// Any edit to text or languages invalidates the displayed result and
    /// error; loading turns on only when there is text to translate.
    pub fn apply(&self, event: &StateEvent) -> TranslationState {
        match event {
            StateEvent::SetSourceLanguage(language) => TranslationState {
                source_language: language.clone(),
                result_text: String::new(),
                last_error: None,
                is_loading: !self.input_text.is_empty(),
                ..self.clone()
            },
            StateEvent::SetTargetLanguage(language) => TranslationState {
                target_language: language.clone(),
                result_text: String::new(),
                last_error: None,
                is_loading: !self.input_text.is_empty(),
                ..self.clone()
            },
            StateEvent::SetInputText(text) => TranslationState {
                input_text: text.clone(),
                result_text: String::new(),
                last_error: None,
                is_loading: !text.is_empty(),
                ..self.clone()
            },
            StateEvent::SwapLanguages => match &self.source_language {
                // Nothing meaningful to swap into the target slot
                SourceLanguage::Auto => self.clone(),
                SourceLanguage::Code(code) => TranslationState {
                    source_language: SourceLanguage::Code(self.target_language.clone()),
                    target_language: code.clone(),
                    result_text: String::new(),
                    last_error: None,
                    ..self.clone()
                },
            },
            StateEvent::TranslationSucceeded(text) => TranslationState {
                result_text: text.clone(),
                is_loading: false,
                last_error: None,
                ..self.clone()
            },
            StateEvent::TranslationFailed(message) => TranslationState {
                last_error: Some(message.clone()),
                is_loading: false,
                ..self.clone()
            },
        }
    }
}
