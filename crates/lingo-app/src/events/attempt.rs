use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use lingo_core::state::TranslationState;
use lingo_core::types::AppEvent;
use lingo_translator::{TranslateError, TranslateRequest, Translator};
use tokio_util::sync::CancellationToken;

/// Tracks which translation attempt is current. Ids increase
/// monotonically; an outcome tagged with any other id is stale.
pub struct AttemptTracker {
    current: u64,
    pending: Option<CancellationToken>,
}

impl AttemptTracker {
    pub fn new() -> Self {
        Self {
            current: 0,
            pending: None,
        }
    }

    /// Supersede the pending attempt (if any) and hand out the next id
    /// with its cancellation token.
    pub fn begin(&mut self) -> (u64, CancellationToken) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }

        self.current += 1;
        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        (self.current, token)
    }

    pub fn is_current(&self, attempt: u64) -> bool {
        attempt == self.current
    }

    pub fn settle(&mut self) {
        self.pending = None;
    }
}

impl Drop for AttemptTracker {
    fn drop(&mut self) {
        // Session teardown cancels whatever is still pending
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

/// One attempt lifecycle: quiet period, then the network call, then the
/// outcome looped back tagged with the attempt id. Cancellable at both
/// stages.
pub fn spawn(
    translator: Arc<dyn Translator>,
    quiet_period: Duration,
    attempt: u64,
    token: CancellationToken,
    state: &TranslationState,
    events_tx: AsyncSender<AppEvent>,
) {
    let text = state.input_text.clone();
    let source_lang = state.source_language.code().cloned();
    let target_lang = state.target_language.clone();

    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(quiet_period) => {}
        }

        // Empty input settles trivially without touching the network
        if text.trim().is_empty() {
            let _ = events_tx
                .send(AppEvent::AttemptSettled {
                    attempt,
                    outcome: Ok(String::new()),
                })
                .await;
            return;
        }

        let request = TranslateRequest {
            text,
            target_lang,
            source_lang,
        };

        let outcome = tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(attempt, "attempt superseded while in flight");
                return;
            }
            result = translator.translate(&request) => result.map_err(|e| user_message(&e)),
        };

        if events_tx
            .send(AppEvent::AttemptSettled { attempt, outcome })
            .await
            .is_err()
        {
            tracing::debug!(attempt, "event channel closed before outcome delivery");
        }
    });
}

/// User-visible message for a failed attempt: the server's own error
/// text when it sent one, a status line for bare protocol failures, a
/// generic fallback for everything transport-level.
pub(crate) fn user_message(error: &TranslateError) -> String {
    match error {
        TranslateError::Server(message) => message.clone(),
        TranslateError::Status(status) => format!("Request failed with status {status}"),
        TranslateError::Network(_) | TranslateError::MalformedResponse(_) => {
            tracing::warn!(%error, "translation attempt failed");
            "An unexpected error occurred during translation.".to_string()
        }
    }
}
