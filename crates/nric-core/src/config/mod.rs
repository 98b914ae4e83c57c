//! Shared configuration utilities
//!
//! - Generic YAML config loading/saving
//! - Config path utilities
//!
//! # Usage
//!
//! ```ignore
//! use nric_core::config::{load_config, save_config, default_config_path};
//!
//! let config: EntryConfig = load_config(&default_config_path());
//! save_config(&config, &default_config_path())?;
//! ```

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path, APP_DIR, CONFIG_FILE};
