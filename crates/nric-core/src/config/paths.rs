//! Standard locations of configuration files

use std::path::PathBuf;

/// Application directory name under the platform config dir
pub const APP_DIR: &str = "nric-entry";

/// Default config file name
pub const CONFIG_FILE: &str = "config.yaml";

/// Get the configuration directory
///
/// Returns: `~/.config/nric-entry` (platform equivalent elsewhere), or
/// `./nric-entry` when no config dir is known.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILE)
}
