//! Address Book Assistant - birthday digest
//!
//! Loads the address book and prints the contacts to congratulate in the
//! coming days. The book is only read, never written.

use address_book_assistant::messages::format_upcoming;
use address_book_assistant::{Config, JsonFileRepository, Session};
use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Logs go to stderr, the digest to stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book at {:?}", config.book_path);
    let session = Session::open(JsonFileRepository::new(&config.book_path))
        .with_context(|| format!("Failed to open address book {:?}", config.book_path))?;

    let today = Local::now().date_naive();
    let upcoming = session
        .book()
        .upcoming_birthdays_within(today, config.birthday_window_days);
    let digest = format_upcoming(&upcoming, config.birthday_window_days);
    println!("{}", digest.trim_end());

    Ok(())
}
