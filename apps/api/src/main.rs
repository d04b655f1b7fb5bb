mod assistant;
mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::{RandomSelection, SelectionStrategy, SkillOverlapSelection};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{CollectionStore, JsonFileStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentHub API v{}", env!("CARGO_PKG_VERSION"));

    // File-backed collection store
    let store: Arc<dyn CollectionStore> = Arc::new(JsonFileStore::open(&config.data_dir).await?);

    // First run: seed the job board
    if store.get_jobs().await?.is_empty() {
        let board = catalog::job_board(config.generated_jobs);
        store.put_jobs(&board).await?;
        info!("Seeded job board with {} postings", board.len());
    }

    // Static candidate catalog, fixed for the lifetime of the process
    let pool = Arc::new(catalog::candidate_pool(config.generated_candidates));
    info!("Candidate catalog holds {} profiles", pool.len());

    let selector = build_selector(&config.selection_strategy);
    info!("Assistant selection strategy: {}", selector.name());

    let state = AppState {
        store,
        selector,
        pool,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback filter when RUST_LOG is unset. Tracing targets use the module
/// path, so the hyphenated package name must be underscored to match.
fn default_filter(level: &str) -> EnvFilter {
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    EnvFilter::new(format!("{crate_target}={level}"))
}

/// Unrecognized values fall back to random selection with a warning.
fn build_selector(name: &str) -> Arc<dyn SelectionStrategy> {
    match name {
        "skill_overlap" => Arc::new(SkillOverlapSelection),
        "random" => Arc::new(RandomSelection),
        other => {
            tracing::warn!("Unknown selection strategy '{other}', using random");
            Arc::new(RandomSelection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_default_filter_enables_crate_info_events() {
        let subscriber = tracing_subscriber::registry().with(default_filter("info"));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::event_enabled!(
                target: "talenthub_api",
                Level::INFO
            ));
            assert!(tracing::event_enabled!(
                target: "talenthub_api::store::file",
                Level::WARN
            ));
            // Other crates stay quiet under the default.
            assert!(!tracing::event_enabled!(target: "hyper", Level::INFO));
        });
    }

    #[test]
    fn test_default_filter_respects_level() {
        let subscriber = tracing_subscriber::registry().with(default_filter("warn"));
        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::event_enabled!(
                target: "talenthub_api",
                Level::INFO
            ));
            assert!(tracing::event_enabled!(
                target: "talenthub_api",
                Level::WARN
            ));
        });
    }

    #[test]
    fn test_build_selector_falls_back_to_random() {
        assert_eq!(build_selector("skill_overlap").name(), "skill_overlap");
        assert_eq!(build_selector("random").name(), "random");
        assert_eq!(build_selector("no-such-strategy").name(), "random");
    }
}
