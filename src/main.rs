use bingo_rooms::{build_router, AppState, InMemoryStore, ServerConfig};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bingo_rooms=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!("Starting bingo room server");

    // The store is injected; swap in a networked client here for production
    let store = Arc::new(InMemoryStore::with_channel_capacity(config.channel_capacity));
    let app_state = AppState::new(store);

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.bind_addr(), "Server running");
    axum::serve(listener, app).await.expect("Server error");
}
