use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lingo_core::language::LanguageCode;
use lingo_core::state::TranslationState;
use lingo_core::types::{AppEvent, Intent, StateEvent};
use lingo_translator::Translator;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod attempt;

use attempt::AttemptTracker;

/// App's main loop: applies intents and attempt outcomes to the
/// translation state, one event at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    translator: Arc<dyn Translator>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (quiet_period, default_target) = {
        let config = state.config.read().await;
        (
            Duration::from_millis(config.debounce_ms),
            config.ui.default_target.clone(),
        )
    };

    let mut controller = TranslationController::new(
        translator,
        quiet_period,
        default_target,
        loopback_tx,
        app_to_ui_tx,
    );

    // Initial snapshot so the front-end can render before any input
    controller.publish().await?;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("event loop stopping");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => {
                controller.handle(event?).await?;
            }
        }
    }
}

/// Reconciles user intents, the debounce timer, and asynchronous
/// translation outcomes into one consistent state.
///
/// At most one attempt is current at any time. Each qualifying change
/// supersedes the previous attempt: its debounce timer (or in-flight
/// call) is cancelled, and its outcome is additionally rejected by
/// attempt id in case the cancellation lost the race.
pub struct TranslationController {
    state: TranslationState,
    tracker: AttemptTracker,
    translator: Arc<dyn Translator>,
    quiet_period: Duration,
    events_tx: AsyncSender<AppEvent>,
    snapshot_tx: AsyncSender<AppEvent>,
}

impl TranslationController {
    pub fn new(
        translator: Arc<dyn Translator>,
        quiet_period: Duration,
        default_target: LanguageCode,
        events_tx: AsyncSender<AppEvent>,
        snapshot_tx: AsyncSender<AppEvent>,
    ) -> Self {
        Self {
            state: TranslationState::new(default_target),
            tracker: AttemptTracker::new(),
            translator,
            quiet_period,
            events_tx,
            snapshot_tx,
        }
    }

    pub async fn handle(&mut self, event: AppEvent) -> anyhow::Result<()> {
        match event {
            AppEvent::Intent(intent) => self.on_intent(intent).await,
            AppEvent::AttemptSettled { attempt, outcome } => {
                self.on_settled(attempt, outcome).await
            }
            // Snapshots flow the other way; nothing to do if one echoes back
            AppEvent::StateChanged(_) => Ok(()),
        }
    }

    async fn on_intent(&mut self, intent: Intent) -> anyhow::Result<()> {
        // Swap with auto-detect source changes nothing and must not
        // invalidate the current attempt
        if matches!(intent, Intent::SwapLanguages) && self.state.source_language.is_auto() {
            tracing::debug!("swap ignored while source is auto-detect");
            return Ok(());
        }

        self.state = self.state.apply(&StateEvent::from(intent));

        let (attempt, token) = self.tracker.begin();
        attempt::spawn(
            self.translator.clone(),
            self.quiet_period,
            attempt,
            token,
            &self.state,
            self.events_tx.clone(),
        );

        self.publish().await
    }

    async fn on_settled(
        &mut self,
        attempt: u64,
        outcome: Result<String, String>,
    ) -> anyhow::Result<()> {
        if !self.tracker.is_current(attempt) {
            tracing::debug!(attempt, "discarding stale attempt outcome");
            return Ok(());
        }
        self.tracker.settle();

        let event = match outcome {
            Ok(text) => StateEvent::TranslationSucceeded(text),
            Err(message) => StateEvent::TranslationFailed(message),
        };
        self.state = self.state.apply(&event);

        self.publish().await
    }

    pub async fn publish(&self) -> anyhow::Result<()> {
        self.snapshot_tx
            .send(AppEvent::StateChanged(self.state.clone()))
            .await?;
        Ok(())
    }
}
