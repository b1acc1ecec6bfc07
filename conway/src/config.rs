// config.rs - Explicit simulation configuration
//
// Passed once at construction time. Nothing in the engine reads global state.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

pub const DEFAULT_ROWS     : usize    = 20;
pub const DEFAULT_COLS     : usize    = 20;
pub const DEFAULT_INTERVAL : Duration = Duration::from_millis(200);
pub const MIN_INTERVAL     : Duration = Duration::from_millis(50);
pub const MAX_INTERVAL     : Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between automatic generations, stored as milliseconds.
    #[serde(rename = "update_interval_ms", with = "millis")]
    pub update_interval: Duration,
    /// Enables debug logging and the history controls in the GUI.
    pub debug: bool,
    /// Directory of saved JSON patterns.
    pub pattern_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            update_interval: DEFAULT_INTERVAL,
            debug: false,
            pattern_dir: PathBuf::from("data"),
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.update_interval = clamp_interval(interval);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_pattern_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pattern_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimension { rows: self.rows, cols: self.cols });
        }
        Ok(())
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

/// Keeps a driver-loop interval within the supported speed range.
pub fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_INTERVAL, MAX_INTERVAL)
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_window() {
        let config = SimulationConfig::default();
        assert_eq!((config.rows, config.cols), (20, 20));
        assert_eq!(config.update_interval, Duration::from_millis(200));
        assert!(!config.debug);
        assert_eq!(config.log_filter(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_switches_log_filter() {
        assert_eq!(SimulationConfig::default().with_debug(true).log_filter(), "debug");
    }

    #[test]
    fn validate_rejects_empty_grid() {
        let config = SimulationConfig::default().with_size(0, 10);
        assert_eq!(config.validate(), Err(LifeError::InvalidDimension { rows: 0, cols: 10 }));
    }

    #[test]
    fn interval_is_clamped() {
        assert_eq!(clamp_interval(Duration::from_millis(1)), MIN_INTERVAL);
        assert_eq!(clamp_interval(Duration::from_secs(5)), MAX_INTERVAL);
        assert_eq!(clamp_interval(Duration::from_millis(300)), Duration::from_millis(300));
        let config = SimulationConfig::default().with_interval(Duration::ZERO);
        assert_eq!(config.update_interval, MIN_INTERVAL);
    }

    #[test]
    fn json_uses_milliseconds_and_fills_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "rows": 8, "update_interval_ms": 350 }"#).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.update_interval, Duration::from_millis(350));

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["update_interval_ms"], 350);
    }
}
