//! Integration-style tests driving the event loop through its channels
//! with a scripted translator and paused tokio time.

mod debounce_tests;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use lingo_config::Config;
use lingo_core::state::TranslationState;
use lingo_core::types::{AppEvent, Intent};
use lingo_translator::{TranslateError, TranslateRequest, Translator};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

pub const RECV_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
enum Scripted {
    Reply { text: String, delay: Duration },
    Fail { message: String, delay: Duration },
}

/// Scripted stand-in for the HTTP translator. Unscripted inputs echo
/// back with a `!` suffix.
pub struct FakeTranslator {
    calls: Mutex<Vec<TranslateRequest>>,
    script: Mutex<HashMap<String, Scripted>>,
}

impl FakeTranslator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(HashMap::new()),
        })
    }

    pub fn reply(&self, input: &str, output: &str, delay: Duration) {
        self.script.lock().unwrap().insert(
            input.to_string(),
            Scripted::Reply {
                text: output.to_string(),
                delay,
            },
        );
    }

    pub fn fail(&self, input: &str, message: &str, delay: Duration) {
        self.script.lock().unwrap().insert(
            input.to_string(),
            Scripted::Fail {
                message: message.to_string(),
                delay,
            },
        );
    }

    pub fn calls(&self) -> Vec<TranslateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslateError> {
        self.calls.lock().unwrap().push(request.clone());

        let scripted = { self.script.lock().unwrap().get(&request.text).cloned() };

        match scripted {
            Some(Scripted::Reply { text, delay }) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Some(Scripted::Fail { message, delay }) => {
                tokio::time::sleep(delay).await;
                Err(TranslateError::Server(message))
            }
            None => Ok(format!("{}!", request.text)),
        }
    }
}

/// Running event loop plus the channel ends a front-end would hold.
pub struct Harness {
    pub intents: AsyncSender<AppEvent>,
    pub snapshots: AsyncReceiver<AppEvent>,
    pub cancel: CancellationToken,
}

impl Harness {
    /// Spawns the event loop with default config (750ms debounce, auto
    /// source, "en" target) and consumes the initial snapshot.
    pub async fn start(translator: Arc<FakeTranslator>) -> Self {
        let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(64);
        let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(128);
        let cancel = CancellationToken::new();

        let state = Arc::new(AppState::new(Config::default()));

        tokio::spawn(event_loop(
            state,
            ui_to_app_rx,
            ui_to_app_tx.clone(),
            app_to_ui_tx,
            translator,
            cancel.child_token(),
        ));

        let harness = Self {
            intents: ui_to_app_tx,
            snapshots: app_to_ui_rx,
            cancel,
        };

        let initial = harness.next_snapshot().await;
        assert!(initial.source_language.is_auto());
        assert_eq!(initial.target_language, "en");
        assert!(!initial.is_loading);

        harness
    }

    pub async fn submit(&self, intent: Intent) {
        self.intents.send(AppEvent::Intent(intent)).await.unwrap();
    }

    /// Injects an attempt outcome as if a network call had completed
    pub async fn forge_settled(&self, attempt: u64, outcome: Result<String, String>) {
        self.intents
            .send(AppEvent::AttemptSettled { attempt, outcome })
            .await
            .unwrap();
    }

    pub async fn next_snapshot(&self) -> TranslationState {
        loop {
            let event = timeout(RECV_TIMEOUT, self.snapshots.recv())
                .await
                .expect("timed out waiting for snapshot")
                .expect("snapshot channel closed");

            if let AppEvent::StateChanged(state) = event {
                return state;
            }
        }
    }

    /// Reads snapshots until `pred` matches, returning the matching one
    pub async fn snapshot_until(
        &self,
        pred: impl Fn(&TranslationState) -> bool,
    ) -> TranslationState {
        loop {
            let state = self.next_snapshot().await;
            if pred(&state) {
                return state;
            }
        }
    }
}
