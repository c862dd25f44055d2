use axum::{extract::State, Json};
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    api::{error::ApiError, v1::latest_measurement_date},
    domain::{format_iso_date, DateWindow},
    state::AppState,
};

/// Date → precipitation. Several stations report per day; the last row read
/// for a date wins.
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// GET /api/v1.0/precipitation - the twelve months up to the latest measurement
pub async fn get_precipitation(
    State(st): State<AppState>,
) -> Result<Json<PrecipitationByDate>, ApiError> {
    let latest = latest_measurement_date(st.store.as_ref()).await?;
    let window = DateWindow::trailing_year(latest)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;
    let start = window.start_key();
    let end = format_iso_date(latest);

    let readings = st.store.precipitation_since(&start, &end).await?;
    debug!(%start, %end, rows = readings.len(), "precipitation window");

    let by_date = readings
        .into_iter()
        .map(|r| (r.date, r.precipitation))
        .collect::<PrecipitationByDate>();

    Ok(Json(by_date))
}
