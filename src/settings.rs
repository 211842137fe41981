//! Runtime settings
//!
//! Read from the page query string in the browser (`?seed=42&log=debug`)
//! and from environment variables natively. Gameplay tuning is not
//! configurable; these only cover reproducibility and diagnostics.

use serde::{Deserialize, Serialize};

/// Frames simulated by the native demo when not overridden
pub const DEFAULT_DEMO_FRAMES: u32 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed RNG seed; `None` means seed from the clock
    pub seed: Option<u64>,
    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
    /// Frames to run in the native demo
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_string(),
            demo_frames: DEFAULT_DEMO_FRAMES,
        }
    }
}

impl Settings {
    /// Parse `key=value` pairs from a URL query string
    ///
    /// Unknown keys and malformed values are logged and ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.trim_start_matches('?');
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            settings.set(key, value);
        }
        settings
    }

    /// Read `DINO_SEED`, `DINO_LOG` and `DINO_FRAMES` from the environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        for (key, var) in [("seed", "DINO_SEED"), ("log", "DINO_LOG"), ("frames", "DINO_FRAMES")] {
            if let Ok(value) = std::env::var(var) {
                settings.set(key, &value);
            }
        }
        settings
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "seed" => match value.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("ignoring invalid seed {:?}", value),
            },
            "log" => match value.parse::<log::LevelFilter>() {
                Ok(_) => self.log_level = value.to_lowercase(),
                Err(_) => log::warn!("ignoring invalid log level {:?}", value),
            },
            "frames" => match value.parse() {
                Ok(frames) => self.demo_frames = frames,
                Err(_) => log::warn!("ignoring invalid frame count {:?}", value),
            },
            _ => log::warn!("ignoring unknown setting {:?}", key),
        }
    }

    /// Log level to initialize the logger with
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Seed to use, falling back to `fallback` (usually the current time)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Settings as a JSON string for the startup log
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}
