use anyhow::Result;
use climate_api::{api, config, state::AppState, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    init_tracing(&cfg.telemetry);

    if !cfg.db.path.exists() {
        warn!(
            path = %cfg.db.path.display(),
            "database file not found; data routes will answer 503 until it appears"
        );
    }

    let (app_state, repo) = AppState::with_sqlite(cfg.clone());
    let app = api::router(app_state, &cfg);

    let addr = cfg.server.socket_addr()?;
    if cfg.server.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0 - the API will be reachable from the network");
    }

    info!(%addr, "starting Climate App");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    repo.close().await;
    warn!("shutdown complete");
    Ok(())
}
