#![forbid(unsafe_code)]

//! Pacing configuration.
//!
//! [`PacingConfig`] gathers the tunables of an animated run. Every field has
//! a default matching the stock animation, so `PacingConfig::default()`
//! reproduces it exactly.
//!
//! # Loading
//!
//! ```toml
//! # algoviz.toml
//! speed = 2.0
//! max_pause_ms = 1000
//! min_run = 16
//! ```
//!
//! ```rust,ignore
//! let pacing = PacingConfig::from_toml_file("algoviz.toml")?;
//! let pacing = PacingConfig::from_json_str(r#"{"speed": 4.0}"#)?;
//! ```

#[cfg(feature = "config")]
use std::path::Path;

use web_time::Duration;

/// Default Tim-sort run length.
pub const DEFAULT_MIN_RUN: usize = 32;

/// Tunables for one engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PacingConfig {
    /// Playback speed multiplier. Every nominal delay is divided by it.
    pub speed: f64,
    /// Upper bound on a single scaled pause, in milliseconds.
    pub max_pause_ms: u64,
    /// Run length that Tim sort insertion-sorts before merging.
    pub min_run: usize,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            max_pause_ms: 2_000,
            min_run: DEFAULT_MIN_RUN,
        }
    }
}

impl PacingConfig {
    /// Scale a nominal step delay by `speed` and clamp it to `max_pause_ms`.
    #[must_use]
    pub fn scale(&self, nominal: Duration) -> Duration {
        let cap = Duration::from_millis(self.max_pause_ms);
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return nominal.min(cap);
        }
        // A tiny speed can push the quotient past what a Duration holds.
        Duration::try_from_secs_f64(nominal.as_secs_f64() / self.speed)
            .map_or(cap, |scaled| scaled.min(cap))
    }

    /// Validate every parameter.
    ///
    /// Returns one message per violation. An empty list means the config is
    /// valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.speed.is_finite() || self.speed <= 0.0 {
            errors.push(format!("speed must be finite and > 0, got {}", self.speed));
        }
        if self.min_run == 0 {
            errors.push("min_run must be >= 1".into());
        }
        errors
    }

    /// Validate and convert the message list into a [`ConfigError`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from a file, picking the format from its extension (`.json`
    /// means JSON, anything else TOML).
    #[cfg(feature = "config")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }
}

/// Errors that can occur when loading a pacing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
