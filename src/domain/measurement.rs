use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Daily observation row from the `measurement` table
///
/// `date` stays ISO text as stored; the service never rewrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Measurement {
    pub id: i64,
    #[sqlx(rename = "station")]
    pub station_code: String,
    pub date: String,
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,
    #[sqlx(rename = "tobs")]
    pub observed_temperature: f64,
}

/// `(date, precipitation)` projection; a missing reading stays `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,
}

/// `(date, tobs)` projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TemperatureObservation {
    pub date: String,
    #[sqlx(rename = "tobs")]
    pub observed_temperature: f64,
}

/// MIN/AVG/MAX of observed temperature over a filtered row set.
///
/// Every field is `None` when no row matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureStats {
    pub fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }
}
