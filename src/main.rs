use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use soiree::server::{
    self,
    config::Config,
    error::AppError,
    gateway::{chat::ChatHub, registry::ConnectionRegistry},
    scheduler::event_reminders,
    service::auth::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let registry = ConnectionRegistry::new();
    let chat = ChatHub::new();
    let tokens = TokenService::new(&config.jwt_secret);

    tracing::info!("Starting server");

    // Start the daily event reminder scheduler
    let scheduler_db = db.clone();
    let scheduler_registry = registry.clone();
    tokio::spawn(async move {
        if let Err(e) = event_reminders::start_scheduler(scheduler_db, scheduler_registry).await {
            tracing::error!("Event reminder scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, registry, chat, tokens);
    let router = server::router::router()
        .with_state(state)
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.listen_addr, e))
        })?;

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
