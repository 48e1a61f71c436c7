use crate::language::{LanguageCode, SourceLanguage};
use crate::state::TranslationState;

/// View-originated operations. The front-end can only construct these,
/// never the settlement events, so outcome injection stays with the
/// controller.
#[derive(Debug, Clone)]
pub enum Intent {
    SetInputText(String),
    SetSourceLanguage(SourceLanguage),
    SetTargetLanguage(LanguageCode),
    SwapLanguages,
}

/// Closed union of reducer transitions, one variant per table row.
#[derive(Debug, Clone)]
pub enum StateEvent {
    SetSourceLanguage(SourceLanguage),
    SetTargetLanguage(LanguageCode),
    SetInputText(String),
    SwapLanguages,
    TranslationSucceeded(String),
    TranslationFailed(String),
}

impl From<Intent> for StateEvent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::SetInputText(text) => StateEvent::SetInputText(text),
            Intent::SetSourceLanguage(language) => StateEvent::SetSourceLanguage(language),
            Intent::SetTargetLanguage(language) => StateEvent::SetTargetLanguage(language),
            Intent::SwapLanguages => StateEvent::SwapLanguages,
        }
    }
}

/// Channel protocol between the front-end task and the event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Intent(Intent),
    /// Outcome of a translation attempt, tagged with the attempt id that
    /// issued it. `Ok` carries the translated text, `Err` the user-visible
    /// message.
    AttemptSettled {
        attempt: u64,
        outcome: Result<String, String>,
    },
    /// Snapshot pushed to the front-end after every applied event.
    StateChanged(TranslationState),
}
