//! Read-only access to the `measurement` and `station` tables.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PrecipitationReading, Station, TemperatureObservation, TemperatureStats};

pub mod sqlite;

pub use sqlite::SqliteRepo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    /// No connection could be acquired from the pool
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Query surface the HTTP handlers depend on.
///
/// Dates are the ISO text stored in `measurement.date`; bounds are inclusive.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Latest `date` present; `NotFound` when the table is empty.
    async fn most_recent_date(&self) -> Result<String, StoreError>;

    /// Readings ordered by date, then row id.
    async fn precipitation_since(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<PrecipitationReading>, StoreError>;

    async fn all_stations(&self) -> Result<Vec<Station>, StoreError>;

    /// All-`None` stats when nothing matches.
    async fn temperature_range(
        &self,
        start: &str,
        end: Option<String>,
    ) -> Result<TemperatureStats, StoreError>;

    async fn temperature_observations(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<TemperatureObservation>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
