use catalog_service_rust::catalog::AppState;
use catalog_service_rust::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default HTTP port, overridable through the `PORT` environment variable.
const DEFAULT_PORT: u16 = 8080;

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    setup_tracing();

    // Initialize application state (catalog file from CATALOG_FILE)
    let state = Arc::new(AppState::from_env());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
