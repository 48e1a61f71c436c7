use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lingo_config::Config;
use lingo_config::ui::UiConfig;
use lingo_core::language::{AUTO_LANGUAGE, SourceLanguage};
use lingo_core::state::TranslationState;
use lingo_core::types::{AppEvent, Intent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// What one input line means
enum LineAction {
    Intent(Intent),
    Notice(String),
    ListLanguages,
    Quit,
    Nothing,
}

/// Line-oriented front-end: forwards intents to the event loop and
/// renders every state snapshot it receives. Holds no translation state
/// of its own.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_config = {
        let config = config.read().await;
        config.ui.clone()
    };

    println!("type text to translate, :from <code|auto>, :to <code>, :swap, :langs, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            event = app_to_ui_rx.recv() => {
                if let AppEvent::StateChanged(state) = event? {
                    render(&state);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    return Ok(());
                };

                match parse_line(line.trim(), &ui_config) {
                    LineAction::Intent(intent) => {
                        ui_to_app_tx.send(AppEvent::Intent(intent)).await?;
                    }
                    LineAction::Notice(message) => println!("{message}"),
                    LineAction::ListLanguages => {
                        println!("  {}  detect language (source only)", AUTO_LANGUAGE);
                        for language in &ui_config.languages {
                            println!("  {}  {}", language.code, language.name);
                        }
                    }
                    LineAction::Quit => return Ok(()),
                    LineAction::Nothing => {}
                }
            }
        }
    }
}

fn parse_line(line: &str, config: &UiConfig) -> LineAction {
    match line {
        "" => LineAction::Nothing,
        ":quit" | ":q" => LineAction::Quit,
        ":swap" => LineAction::Intent(Intent::SwapLanguages),
        ":langs" => LineAction::ListLanguages,
        ":clear" => LineAction::Intent(Intent::SetInputText(String::new())),
        _ => {
            if let Some(code) = line.strip_prefix(":from ") {
                let code = code.trim();
                if code == AUTO_LANGUAGE {
                    LineAction::Intent(Intent::SetSourceLanguage(SourceLanguage::Auto))
                } else if config.supports(code) {
                    LineAction::Intent(Intent::SetSourceLanguage(SourceLanguage::Code(
                        code.to_string(),
                    )))
                } else {
                    LineAction::Notice(format!("unsupported language '{code}' (:langs lists codes)"))
                }
            } else if let Some(code) = line.strip_prefix(":to ") {
                let code = code.trim();
                // Auto-detect is source-only, so it is simply not in the list
                if config.supports(code) {
                    LineAction::Intent(Intent::SetTargetLanguage(code.to_string()))
                } else {
                    LineAction::Notice(format!("unsupported language '{code}' (:langs lists codes)"))
                }
            } else if line.starts_with(':') {
                LineAction::Notice(format!("unknown command '{line}'"))
            } else {
                LineAction::Intent(Intent::SetInputText(line.to_string()))
            }
        }
    }
}

fn render(state: &TranslationState) {
    let pair = format!("{} -> {}", state.source_language, state.target_language);

    if let Some(error) = &state.last_error {
        println!("[{pair}] error: {error}");
    } else if state.is_loading {
        println!("[{pair}] ...");
    } else if !state.result_text.is_empty() {
        println!("[{pair}] {}", state.result_text);
    }
}
