//! Shopdesk - desktop admin and customer account client for the shop backend.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use shopdesk as app;

use app::api::ApiClient;
use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop admin and customer account client for the shop backend.
#[derive(Parser)]
#[command(name = "shopdesk")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Shopdesk starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {e}");
            AppConfig::default()
        }
    };

    tracing::info!("Backend: {}", config.api.base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Shopdesk")
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 550.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let api = ApiClient::new(&config.api.base_url, config.api.timeout_secs).expect("Failed to build HTTP client");

    eframe::run_native(
        "Shopdesk",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(api, config, rt)))),
    )
}
