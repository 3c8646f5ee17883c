//! Runtime tunables.
//!
//! Defaults reproduce the shipped page. A page may override any subset by
//! embedding `<script type="application/json" id="site-config">{...}</script>`;
//! keys are camelCase and every key is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// `localStorage` key for the explicit theme choice.
    pub storage_key: String,
    /// How long a toast stays on screen.
    pub toast_duration_ms: u32,
    /// Time for a counter to climb from zero to its target.
    pub count_duration_ms: f64,
    /// Visible fraction that triggers a reveal.
    pub reveal_threshold: f64,
    /// Visible fraction that starts a counter.
    pub counter_threshold: f64,
    /// Full parallax travel in pixels across the hero, per axis.
    pub parallax_strength: f64,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "anunnaki-theme".to_owned(),
            toast_duration_ms: 5200,
            count_duration_ms: 1600.0,
            reveal_threshold: 0.2,
            counter_threshold: 1.0,
            parallax_strength: 20.0,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] for malformed JSON or unknown keys and
    /// [`SiteError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::InvalidConfig("storageKey must not be empty".to_owned()));
        }
        if self.toast_duration_ms == 0 {
            return Err(SiteError::InvalidConfig("toastDurationMs must be positive".to_owned()));
        }
        if !(self.count_duration_ms.is_finite() && self.count_duration_ms > 0.0) {
            return Err(SiteError::InvalidConfig("countDurationMs must be positive".to_owned()));
        }
        for (name, value) in [
            ("revealThreshold", self.reveal_threshold),
            ("counterThreshold", self.counter_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SiteError::InvalidConfig(format!("{name} must be within 0..=1, got {value}")));
            }
        }
        if !(self.parallax_strength.is_finite() && self.parallax_strength >= 0.0) {
            return Err(SiteError::InvalidConfig("parallaxStrength must be finite and non-negative".to_owned()));
        }
        self.level_filter()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] when `logLevel` is not a `log`
    /// level name.
    pub fn level_filter(&self) -> Result<LevelFilter, SiteError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SiteError::InvalidConfig(format!("unknown logLevel {:?}", self.log_level)))
    }
}
