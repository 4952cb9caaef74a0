//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `iotsim.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated device latencies.
    pub devices: DevicesConfig,
    /// Demo program settings.
    pub demo: DemoConfig,
    /// Event bus settings.
    pub events: EventsConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Artificial latency of each virtual device, in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub light_delay_ms: u64,
    pub speaker_delay_ms: u64,
    pub toilet_delay_ms: u64,
}

/// Parameters of the wake-up and sleep programs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Title played by the speaker at the end of the wake-up program.
    pub song: String,
}

/// In-process event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Number of events buffered for the run summary.
    pub capacity: usize,
}

impl Config {
    /// Load configuration from `iotsim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("iotsim.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// `RUST_LOG` wins over `IOTSIM_LOG` when both are set.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("IOTSIM_DELAY_MS")
            && let Ok(millis) = val.parse()
        {
            self.devices.light_delay_ms = millis;
            self.devices.speaker_delay_ms = millis;
            self.devices.toilet_delay_ms = millis;
        }
        if let Some(val) = var("IOTSIM_SONG") {
            self.demo.song = val;
        }
        if let Some(val) = var("IOTSIM_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.events.capacity == 0 {
            return Err(ConfigError::Validation(
                "events.capacity must be non-zero".to_string(),
            ));
        }
        if self.demo.song.trim().is_empty() {
            return Err(ConfigError::Validation(
                "demo.song must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl EventsConfig {
    /// Make sure the bus buffers a whole run, so the summary drained after
    /// it sees every event.
    ///
    /// # Errors
    ///
    /// Returns a validation error when fewer than `expected` events fit.
    pub fn ensure_room_for(&self, expected: usize) -> Result<(), ConfigError> {
        if self.capacity < expected {
            return Err(ConfigError::Validation(format!(
                "events.capacity is {} but the run publishes {expected} events",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl DevicesConfig {
    #[must_use]
    pub fn light_delay(&self) -> Duration {
        Duration::from_millis(self.light_delay_ms)
    }

    #[must_use]
    pub fn speaker_delay(&self) -> Duration {
        Duration::from_millis(self.speaker_delay_ms)
    }

    #[must_use]
    pub fn toilet_delay(&self) -> Duration {
        Duration::from_millis(self.toilet_delay_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "iotsim=info,iotsim_app=info,iotsim_adapter_virtual=info".to_string(),
        }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            light_delay_ms: 500,
            speaker_delay_ms: 500,
            toilet_delay_ms: 500,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            song: "Rick Astley - Never Gonna Give You Up".to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
