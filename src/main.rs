//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive session on stdin/stdout and
//! saves the book when the session ends.

use anyhow::{Context, Result};
use contact_book::{Assistant, BookRepository, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::startup_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(&config.book_path);
    let mut book = repository.load().map_err(|e| {
        error!("Failed to load address book: {}", e);
        e
    })?;

    let stdin = io::stdin();
    let session = Assistant::new(&mut book).run(stdin.lock(), io::stdout());

    // Save whatever was entered even if the terminal went away mid-session
    repository
        .save(&book)
        .context("Failed to save address book")?;
    session.context("Interactive session failed")?;

    info!("Saved {} contacts, shutdown complete", book.len());
    Ok(())
}
