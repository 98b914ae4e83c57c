//! Configuration for nric-entry
//!
//! Stored at `~/.config/nric-entry/config.yaml`. Missing or unreadable files
//! yield defaults; out-of-range values are clamped by [`EntryConfig::validate`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use nric_core::config::{load_config, save_config};
use nric_core::selector::{Geometry, SelectionAnchor};
use nric_core::wheel::min_loop_symbols;
use nric_core::{Alphabet, EntrySettings, Mode, SymbolSet};

/// Default validation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/validate";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    pub endpoint: EndpointConfig,
    pub timing: TimingConfig,
    pub alphabet: AlphabetConfig,
    /// Which point of a wheel window selects its item
    pub anchor: SelectionAnchor,
    pub start_mode: Mode,
    /// Submit automatically once the last slot is filled
    pub auto_submit: bool,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            timing: TimingConfig::default(),
            alphabet: AlphabetConfig::default(),
            anchor: SelectionAnchor::Center,
            start_mode: Mode::Wheel,
            auto_submit: true,
        }
    }
}

/// Validation service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
    /// Request timeout in seconds (1-120)
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Wheel timers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet time after the last scroll event before a wheel counts as settled (20-1000)
    pub settle_ms: u64,
    /// How long scroll echoes of a programmatic move are ignored (10-500)
    pub suppress_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            suppress_ms: 50,
        }
    }
}

impl TimingConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn suppress(&self) -> Duration {
        Duration::from_millis(self.suppress_ms)
    }
}

/// Letter sets for the first and last slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetConfig {
    pub prefix: String,
    pub suffix: String,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        let letters: String = ('A'..='Z').collect();
        Self {
            prefix: letters.clone(),
            suffix: letters,
        }
    }
}

/// At least `min_len` uppercase ASCII letters, no repeats
fn is_letter_set(set: &str, min_len: usize) -> bool {
    let mut seen = [false; 26];
    set.chars().count() >= min_len
        && set.chars().all(|c| {
            if !c.is_ascii_uppercase() {
                return false;
            }
            let index = (c as u8 - b'A') as usize;
            !std::mem::replace(&mut seen[index], true)
        })
}

impl EntryConfig {
    /// Clamp numeric values and reset malformed letter sets
    ///
    /// A letter set must be long enough for its wheel to loop, see
    /// [`min_loop_symbols`].
    pub fn validate(&mut self) {
        self.endpoint.timeout_secs = self.endpoint.timeout_secs.clamp(1, 120);
        self.timing.settle_ms = self.timing.settle_ms.clamp(20, 1000);
        self.timing.suppress_ms = self.timing.suppress_ms.clamp(10, 500);

        let defaults = AlphabetConfig::default();
        let min_len = min_loop_symbols(Geometry::with_anchor(self.anchor));
        if !is_letter_set(&self.alphabet.prefix, min_len) {
            log::warn!(
                "validate: Invalid prefix letters {:?} (need {} distinct), using A-Z",
                self.alphabet.prefix,
                min_len
            );
            self.alphabet.prefix = defaults.prefix.clone();
        }
        if !is_letter_set(&self.alphabet.suffix, min_len) {
            log::warn!(
                "validate: Invalid suffix letters {:?} (need {} distinct), using A-Z",
                self.alphabet.suffix,
                min_len
            );
            self.alphabet.suffix = defaults.suffix;
        }

        if self.endpoint.url.trim().is_empty() {
            self.endpoint.url = DEFAULT_ENDPOINT.to_string();
        }
    }

    /// Core settings derived from this config
    pub fn to_settings(&self) -> EntrySettings {
        EntrySettings {
            alphabet: Alphabet::new(
                SymbolSet::new(self.alphabet.prefix.chars()),
                SymbolSet::new(self.alphabet.suffix.chars()),
            ),
            geometry: Geometry::with_anchor(self.anchor),
            start_mode: self.start_mode,
            auto_submit: self.auto_submit,
            endpoint: self.endpoint.url.clone(),
        }
    }
}

/// Load and validate the config at `path`
pub fn load(path: &Path) -> EntryConfig {
    let mut config: EntryConfig = load_config(path);
    config.validate();
    log::info!(
        "load: endpoint={} timeout={}s settle={}ms suppress={}ms mode={}",
        config.endpoint.url,
        config.endpoint.timeout_secs,
        config.timing.settle_ms,
        config.timing.suppress_ms,
        config.start_mode
    );
    config
}

/// Save the config to `path`
pub fn save(config: &EntryConfig, path: &Path) -> anyhow::Result<()> {
    save_config(config, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EntryConfig::default();
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT);
        assert_eq!(config.endpoint.timeout_secs, 10);
        assert_eq!(config.timing.settle_ms, 100);
        assert_eq!(config.timing.suppress_ms, 50);
        assert_eq!(config.alphabet.prefix.len(), 26);
        assert_eq!(config.start_mode, Mode::Wheel);
        assert!(config.auto_submit);
    }

    #[test]
    fn test_validate_clamps_ranges() {
        let mut config = EntryConfig::default();
        config.endpoint.timeout_secs = 0;
        config.timing.settle_ms = 5;
        config.timing.suppress_ms = 10_000;
        config.validate();

        assert_eq!(config.endpoint.timeout_secs, 1);
        assert_eq!(config.timing.settle_ms, 20);
        assert_eq!(config.timing.suppress_ms, 500);
    }

    #[test]
    fn test_validate_resets_bad_letter_sets() {
        let mut config = EntryConfig::default();
        config.alphabet.prefix = "STFGM".to_string();
        config.alphabet.suffix = "AABCDE".to_string();
        config.validate();
        assert_eq!(config.alphabet.prefix, "STFGM");
        assert_eq!(config.alphabet.suffix, AlphabetConfig::default().suffix);

        config.alphabet.prefix = "st".to_string();
        config.alphabet.suffix = String::new();
        config.validate();
        assert_eq!(config.alphabet.prefix, AlphabetConfig::default().prefix);
        assert_eq!(config.alphabet.suffix, AlphabetConfig::default().suffix);
    }

    #[test]
    fn test_validate_resets_letter_sets_too_short_to_loop() {
        let mut config = EntryConfig::default();
        config.alphabet.prefix = "STFG".to_string();
        config.alphabet.suffix = "A".to_string();
        config.validate();
        assert_eq!(config.alphabet.prefix, AlphabetConfig::default().prefix);
        assert_eq!(config.alphabet.suffix, AlphabetConfig::default().suffix);

        let settings = config.to_settings();
        assert_eq!(settings.alphabet.for_slot(0).len(), 26);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "endpoint:\n  url: http://example.test/check\nstart_mode: manual\n";
        let config: EntryConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.endpoint.url, "http://example.test/check");
        assert_eq!(config.endpoint.timeout_secs, 10);
        assert_eq!(config.start_mode, Mode::Manual);
        assert!(config.auto_submit);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = EntryConfig::default();
        config.alphabet.prefix = "STFGM".to_string();
        config.anchor = SelectionAnchor::Top;
        config.auto_submit = false;
        save(&config, &path).unwrap();

        assert_eq!(load(&path), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load(&dir.path().join("absent.yaml")), EntryConfig::default());
    }

    #[test]
    fn test_settings_use_configured_letters() {
        let mut config = EntryConfig::default();
        config.alphabet.prefix = "STFGM".to_string();
        config.start_mode = Mode::Manual;
        let settings = config.to_settings();

        assert_eq!(settings.alphabet.for_slot(0).len(), 5);
        assert_eq!(settings.alphabet.for_slot(8).len(), 26);
        assert_eq!(settings.start_mode, Mode::Manual);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }
}
