pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::Scheduler;

use crate::config::Config;
use crate::db::Database;
use crate::services::audio::{AudioLibrary, SpeechSynthesizer, TranslateTts, AUDIO_ROUTE};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub audio: Arc<AudioLibrary>,
    pub tts: Arc<dyn SpeechSynthesizer>,
    pub scheduler: Arc<Scheduler>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    tracing::info!("Preparing audio directory {}...", config.audio_dir.display());
    let audio = AudioLibrary::new(&config.audio_dir);
    audio.ensure_dir().await?;

    let state = AppState {
        db: Arc::new(db),
        audio: Arc::new(audio),
        tts: Arc::new(TranslateTts::new(&config.tts_endpoint, &config.tts_lang)),
        scheduler: Arc::new(Scheduler::default()),
    };

    let app = router(state);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router with middleware.
pub fn router(state: AppState) -> Router {
    let audio_files = ServeDir::new(state.audio.dir());

    Router::new()
        .route("/health", get(health_check))
        .route("/api/words", post(routes::words::submit))
        .route("/api/train", get(routes::study::train))
        .route("/api/update", post(routes::study::update))
        .nest_service(AUDIO_ROUTE, audio_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
