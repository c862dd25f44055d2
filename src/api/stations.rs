use axum::{extract::State, Json};

use crate::{api::error::ApiError, state::AppState};

/// `[id, station_code, name]`
pub type StationSummary = (i64, String, String);

/// GET /api/v1.0/stations - one entry per station
pub async fn list_stations(
    State(st): State<AppState>,
) -> Result<Json<Vec<StationSummary>>, ApiError> {
    let stations = st.store.all_stations().await?;
    Ok(Json(stations.iter().map(|s| s.summary()).collect()))
}
