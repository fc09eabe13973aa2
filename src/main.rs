use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oxiteller::application::services::AccountStore;
use oxiteller::domain::ports::KeyValueStore;
use oxiteller::infrastructure::{AppConfig, CliArgs, FileKeyValueStore, StorageManager};
use oxiteller::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    // The terminal belongs to the TUI, so logs only ever go to a file.
    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let manager = StorageManager::new()?;
    let mut config = manager.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(name = oxiteller::NAME, version = oxiteller::VERSION, "Starting");

    let data_dir = config
        .effective_data_dir()
        .ok_or_else(|| eyre!("failed to determine data directory"))?;
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(data_dir)?);

    if config.seed_demo_account {
        AccountStore::new(kv.clone()).ensure_seed_account()?;
    }

    Ok(App::new(kv))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal);

    ratatui::restore();

    result
}
