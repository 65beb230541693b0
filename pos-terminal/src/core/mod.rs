//! Process setup: configuration and logging

pub mod config;
pub mod logger;

use anyhow::Result;

/// Prepare the process environment: load `.env` if present, read the
/// configuration from the environment and initialize logging. Called
/// once from `main` before anything else.
pub fn setup_environment() -> Result<config::Config> {
    dotenv::dotenv().ok();
    let config = config::Config::from_env();
    logger::init_logger(config.log_dir.as_deref());
    Ok(config)
}
