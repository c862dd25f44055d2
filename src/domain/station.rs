use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Observation point row from the `station` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Station {
    pub id: i64,
    #[sqlx(rename = "station")]
    pub station_code: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

impl Station {
    /// `[id, station_code, name]`, the shape served by the stations listing
    pub fn summary(&self) -> (i64, String, String) {
        (self.id, self.station_code.clone(), self.name.clone())
    }
}
