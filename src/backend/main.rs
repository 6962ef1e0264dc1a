/**
 * Enrollgate Server Entry Point
 *
 * Loads `.env`, initializes tracing and serves the account endpoints.
 */

use enrollgate::backend::server::{config::server_port, create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started (RUST_LOG={})", env_filter);

    let app = create_app().await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], server_port()));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
