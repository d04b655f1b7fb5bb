use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; the service starts with no .env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory the JSON file store writes its collections into.
    pub data_dir: PathBuf,
    /// Selection strategy for assistant candidate picks: "random" or
    /// "skill_overlap".
    pub selection_strategy: String,
    /// How many synthetic candidates pad the seed catalog.
    pub generated_candidates: usize,
    /// How many synthetic postings pad the seed board.
    pub generated_jobs: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            selection_strategy: std::env::var("SELECTION_STRATEGY")
                .unwrap_or_else(|_| "random".to_string()),
            generated_candidates: std::env::var("GENERATED_CANDIDATES")
                .unwrap_or_else(|_| "12".to_string())
                .parse::<usize>()
                .context("GENERATED_CANDIDATES must be a non-negative integer")?,
            generated_jobs: std::env::var("GENERATED_JOBS")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<usize>()
                .context("GENERATED_JOBS must be a non-negative integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
