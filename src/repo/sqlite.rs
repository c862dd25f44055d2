use async_trait::async_trait;
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use std::time::Duration;
use tracing::{debug, info};

use super::{ClimateStore, StoreError};
use crate::config::DbConfig;
use crate::domain::{PrecipitationReading, Station, TemperatureObservation, TemperatureStats};

/// `ClimateStore` over a SQLite file.
///
/// Every operation checks a connection out of the pool for its own duration;
/// the connection goes back when the guard drops, on success or error.
#[derive(Debug, Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Build a lazily connecting pool. A missing or unreadable file surfaces
    /// as `StoreError::Unavailable` on the first request, not at startup.
    pub fn connect_lazy(cfg: &DbConfig) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&cfg.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .connect_lazy_with(options);

        info!(path = %cfg.path.display(), "configured climate database");
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        info!("closing climate database pool");
        self.pool.close().await;
    }

    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::Unavailable)
    }
}

#[async_trait]
impl ClimateStore for SqliteRepo {
    async fn most_recent_date(&self) -> Result<String, StoreError> {
        let mut conn = self.acquire().await?;
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *conn)
            .await?;

        latest.ok_or_else(|| StoreError::NotFound("measurement table has no rows".to_string()))
    }

    async fn precipitation_since(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<PrecipitationReading>, StoreError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, PrecipitationReading>(
            r#"
            SELECT date, CAST(prcp AS REAL) AS prcp
            FROM measurement
            WHERE date >= ?1 AND date <= ?2
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await?;

        debug!(start, end, rows = rows.len(), "fetched precipitation");
        Ok(rows)
    }

    async fn all_stations(&self) -> Result<Vec<Station>, StoreError> {
        let mut conn = self.acquire().await?;
        let stations = sqlx::query_as::<_, Station>(
            r#"
            SELECT id, station, name,
                   CAST(latitude AS REAL) AS latitude,
                   CAST(longitude AS REAL) AS longitude,
                   CAST(elevation AS REAL) AS elevation
            FROM station
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(stations)
    }

    async fn temperature_range(
        &self,
        start: &str,
        end: Option<String>,
    ) -> Result<TemperatureStats, StoreError> {
        let mut conn = self.acquire().await?;
        // A NULL end leaves the upper bound open.
        let stats = sqlx::query_as::<_, TemperatureStats>(
            r#"
            SELECT CAST(MIN(tobs) AS REAL) AS tmin,
                   CAST(AVG(tobs) AS REAL) AS tavg,
                   CAST(MAX(tobs) AS REAL) AS tmax
            FROM measurement
            WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&mut *conn)
        .await?;

        Ok(stats)
    }

    async fn temperature_observations(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<TemperatureObservation>, StoreError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, TemperatureObservation>(
            r#"
            SELECT date, CAST(tobs AS REAL) AS tobs
            FROM measurement
            WHERE date >= ?1 AND date <= ?2
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await?;

        debug!(start, end, rows = rows.len(), "fetched temperature observations");
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
