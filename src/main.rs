//! Library catalog - interactive session
//!
//! Opens the configured catalog file and runs the text menu on stdin/stdout.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{config::AppConfig, shell::Shell, Library};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Logs go to stderr so they stay out of the menu
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting library catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut library = Library::open(config.clone())?;

    let stdin = io::stdin();
    let mut shell = Shell::new(&config, stdin.lock(), io::stdout());
    shell.run(&mut library)?;

    Ok(())
}
