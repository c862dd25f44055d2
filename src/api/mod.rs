pub mod error;
pub mod health;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod v1;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, state::AppState};

pub const WELCOME_TEXT: &str = "Welcome to the Climate App";

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(welcome))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readiness_check))
        .nest("/api/v1.0", v1::router())
        .with_state(state);

    if cfg.server.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET]);
        router = router.layer(cors);
    }

    router
        .layer(ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(
            cfg.server.request_timeout_secs,
        ))))
        .layer(TraceLayer::new_for_http())
}

/// GET / - plain text greeting
pub async fn welcome() -> &'static str {
    WELCOME_TEXT
}
