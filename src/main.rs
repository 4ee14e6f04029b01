// src/main.rs

//! # Main Application Entry Point
//!
//! Sets up the asynchronous environment, initializes application-wide shared
//! state, and starts the Axum server on the port the frontend expects.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foodrec_backend::api::state::AppState;
use foodrec_backend::routes::create_router;

/// The main entry point for the Tokio runtime.
#[tokio::main]
async fn main() {
    // The frontend is hardcoded to call http://127.0.0.1:5000
    const HOST: [u8; 4] = [127, 0, 0, 1];
    const PORT: u16 = 5000;

    // 1. Setup Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodrec_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting food recommendation backend...");

    // 2. Initialize Shared State
    let state = AppState::new();

    // 3. Configure Router
    let app = create_router(state);

    // 4. Configure Server Listener
    let addr = SocketAddr::from((HOST, PORT));

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind TCP listener to {}: {}", addr, e);
            return;
        }
    };

    info!("Server listening on http://{}", addr);

    // 5. Run the Server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
