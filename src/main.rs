use handrps::{
    event::{EventBus, LoggingRoundSubscriber},
    session::{self, SessionManager},
    AppState, Config,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handrps=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(2);
        }
    };

    info!(
        addr = %config.addr,
        difficulty = ?config.default_difficulty,
        seeded = config.seed.is_some(),
        "Starting hand rock-paper-scissors server"
    );

    let sessions = SessionManager::new(EventBus::new(config.event_capacity))
        .with_default_difficulty(config.default_difficulty)
        .with_default_seed(config.seed)
        .with_subscriber(Arc::new(LoggingRoundSubscriber));

    let app = session::router(AppState::new(sessions)).layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!("Server running on http://{}", config.addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped");
    }
}
