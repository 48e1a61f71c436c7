use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod network;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,

    /// Quiet period before a translation attempt is issued
    pub debounce_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(750);

        Config {
            network: NetworkConfig::new(),
            ui: UiConfig::default(),
            debounce_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            ui: UiConfig::default(),
            debounce_ms: 750,
        }
    }
}
