//! # Doc Feedback
//!
//! Backend collecting like/dislike feedback on documentation pages.
//!
//! One POST endpoint takes a JSON submission, validates it, and writes it to a
//! MongoDB collection. Nothing else: no reads, no auth, no aggregation.
//!
//! # Flow
//!
//! - The docs widget POSTs `{page, type, options?, comment?}`
//! - The payload is validated field by field before anything touches the store
//! - A valid record gets exactly one insert; the assigned id goes back in a 201
//! - Bad input is a 400 with the offending field's message
//! - A store failure is a 500 with a generic body, the cause only in the log
//!
//! # Environment
//!
//! - `RUST_PORT`: listen port, default 3000
//! - `MONGODB_URL`: connection string, database taken from its path
//! - `ALLOWED_ORIGIN`: the single origin CORS will admit
//! - `FEEDBACK_PATH`: route path, default `/api/feedback`
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::post,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod feedback;
pub mod routes;
pub mod state;

use routes::feedback_handler;
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let origin = state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .expect("ALLOWED_ORIGIN misconfigured!");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route(&state.config.feedback_path, post(feedback_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
