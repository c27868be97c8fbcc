pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, synthesis::SynthesisController};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::TtsRepository;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and middleware
pub fn create_router(
    tts_repo: Arc<dyn TtsRepository>,
    synthesis_controller: Arc<SynthesisController>,
) -> Router {
    let synthesis_routes = Router::new()
        .route(
            "/synthesize",
            axum::routing::post(SynthesisController::synthesize),
        )
        .with_state(synthesis_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_repo)
        .merge(synthesis_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
