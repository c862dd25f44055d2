use axum::{routing::get, Router};
use chrono::NaiveDate;

use crate::{
    api::{error::ApiError, precipitation, stations, temperature},
    domain::parse_iso_date,
    repo::ClimateStore,
    state::AppState,
};

/// Routes mounted under `/api/v1.0`.
///
/// The named routes are static segments, so they win over `/:start`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(precipitation::get_precipitation))
        .route("/stations", get(stations::list_stations))
        .route("/tobs", get(temperature::get_observations))
        .route("/:start", get(temperature::stats_since))
        .route("/:start/:end", get(temperature::stats_between))
}

/// Latest measurement date, parsed so windows can be derived from it.
pub(crate) async fn latest_measurement_date(
    store: &dyn ClimateStore,
) -> Result<NaiveDate, ApiError> {
    let raw = store.most_recent_date().await?;
    parse_iso_date(&raw)
        .map_err(|e| ApiError::InternalError(format!("stored measurement date: {e}")))
}
