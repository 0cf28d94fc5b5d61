//! Affectation Wizard server entry point.

use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use affectation_wizard::adapters::http::{build_router, AppState};
use affectation_wizard::adapters::model::ModelBundle;
use affectation_wizard::adapters::session::InMemoryWizardSessionStore;
use affectation_wizard::adapters::storage::FileHistoryStore;
use affectation_wizard::application::EvictIdleSessionsHandler;
use affectation_wizard::config::AppConfig;
use affectation_wizard::domain::foundation::Timestamp;

const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = ?config.server.environment, "Starting affectation wizard");

    // The model is required; a missing or invalid artifact aborts startup
    let bundle = ModelBundle::load(&config.model.artifact_path)
        .await?
        .install()?;

    let sessions = Arc::new(InMemoryWizardSessionStore::new());
    let history = Arc::new(FileHistoryStore::new(&config.history.file_path));
    info!(path = %config.history.file_path.display(), "History store ready");

    let state = AppState::new(
        bundle.registry(),
        bundle.classifier(),
        sessions.clone(),
        history,
        config.wizard.diagnosis_strategy,
    );

    let evictor = EvictIdleSessionsHandler::new(sessions, config.wizard.session_ttl());
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(EVICTION_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = evictor.handle(Timestamp::now()).await {
                tracing::warn!(error = %e, "Session eviction failed");
            }
        }
    });

    let app = build_router(state);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
