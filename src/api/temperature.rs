use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    api::{error::ApiError, v1::latest_measurement_date},
    domain::{DateWindow, TemperatureStats},
    state::AppState,
};

pub type ObservationsByDate = BTreeMap<String, f64>;

/// GET /api/v1.0/tobs - observed temperatures for the calendar year before
/// the latest measurement
pub async fn get_observations(
    State(st): State<AppState>,
) -> Result<Json<ObservationsByDate>, ApiError> {
    let latest = latest_measurement_date(st.store.as_ref()).await?;
    let window = DateWindow::previous_calendar_year(latest)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;
    let start = window.start_key();
    let end = window
        .end_key()
        .ok_or_else(|| ApiError::InternalError("calendar year window is open".to_string()))?;

    let rows = st.store.temperature_observations(&start, &end).await?;
    debug!(%start, %end, rows = rows.len(), "temperature observation window");

    Ok(Json(
        rows.into_iter()
            .map(|r| (r.date, r.observed_temperature))
            .collect(),
    ))
}

/// GET /api/v1.0/:start
pub async fn stats_since(
    State(st): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, ApiError> {
    let window = DateWindow::parse(&start, None)?;
    stats_for(&st, window).await
}

/// GET /api/v1.0/:start/:end - both bounds inclusive
pub async fn stats_between(
    State(st): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, ApiError> {
    let window = DateWindow::parse(&start, Some(&end))?;
    stats_for(&st, window).await
}

async fn stats_for(st: &AppState, window: DateWindow) -> Result<Json<TemperatureStats>, ApiError> {
    let start = window.start_key();
    let end = window.end_key();
    debug!(%start, end = ?end, "temperature stats");
    let stats = st.store.temperature_range(&start, end).await?;
    Ok(Json(stats))
}
