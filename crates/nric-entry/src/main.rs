//! NRIC Entry - GUI entry point
//!
//! ## Command line flags
//!
//! - `--manual`: Start in Manual mode
//! - `--endpoint <url>`: Override the validation endpoint
//! - `--write-config`: Save the effective config to its default path

use std::cell::RefCell;

use iced::Size;

use nric_core::config::default_config_path;
use nric_core::Mode;
use nric_entry::config::{self, EntryConfig};
use nric_entry::ui::EntryApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("nric-entry starting up");

    let args: Vec<String> = std::env::args().collect();
    let config_path = default_config_path();
    let mut entry_config = config::load(&config_path);
    apply_flags(&mut entry_config, &args);

    if args.iter().any(|arg| arg == "--write-config") {
        match config::save(&entry_config, &config_path) {
            Ok(()) => log::info!("Config written to {:?}", config_path),
            Err(e) => log::error!("Could not write config: {:#}", e),
        }
    }

    // The boot closure must be Fn; the config is taken on the single call
    let config_cell = RefCell::new(Some(entry_config));

    iced::application(
        move || {
            let entry_config = config_cell.borrow_mut().take().unwrap_or_default();
            EntryApp::new(&entry_config)
        },
        EntryApp::update,
        EntryApp::view,
    )
    .title(EntryApp::title)
    .theme(EntryApp::theme)
    .subscription(EntryApp::subscription)
    .window_size(Size::new(640.0, 420.0))
    .run()
}

/// Apply command line overrides on top of the loaded config
fn apply_flags(config: &mut EntryConfig, args: &[String]) {
    if args.iter().any(|arg| arg == "--manual") {
        log::info!("Starting in Manual mode via --manual flag");
        config.start_mode = Mode::Manual;
    }

    if let Some(url) = args
        .iter()
        .position(|arg| arg == "--endpoint")
        .and_then(|index| args.get(index + 1))
    {
        log::info!("Endpoint overridden via --endpoint: {}", url);
        config.endpoint.url = url.clone();
    }
}
