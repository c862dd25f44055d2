//! Shared fixtures: an in-memory copy of the two climate tables.
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use climate_api::{
    api,
    config::Config,
    domain::{Measurement, Station},
    repo::SqliteRepo,
    state::AppState,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tower::ServiceExt;

pub const SCHEMA: &str = r#"
    CREATE TABLE measurement (
        id INTEGER NOT NULL PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
    CREATE TABLE station (
        id INTEGER NOT NULL PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
"#;

pub fn stations() -> Vec<Station> {
    [
        (1, "USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
        (2, "USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
        (3, "USC00514830", "KUALOA RANCH HEADQUARTERS 886.9, HI US", 21.5213, -157.8374, 7.0),
        (4, "USC00517948", "PEARL CITY, HI US", 21.3934, -157.9751, 11.9),
        (5, "USC00518838", "UPPER WAHIAWA 874.3, HI US", 21.4992, -158.0111, 306.6),
        (6, "USC00519523", "WAIMANALO EXPERIMENTAL FARM, HI US", 21.33556, -157.71139, 19.5),
        (7, "USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
        (8, "USC00511918", "HONOLULU OBSERVATORY 702.2, HI US", 21.3152, -157.9992, 0.9),
        (9, "USC00516128", "MANOA LYON ARBO 785.2, HI US", 21.3331, -157.8025, 152.4),
    ]
    .into_iter()
    .map(|(id, code, name, lat, lon, elev)| Station {
        id,
        station_code: code.to_string(),
        name: name.to_string(),
        latitude: Some(lat),
        longitude: Some(lon),
        elevation: Some(elev),
    })
    .collect()
}

/// Deliberately out of date order. Latest date is 2017-08-23.
pub fn measurements() -> Vec<Measurement> {
    [
        (1, "USC00519397", "2017-08-23", Some(0.0), 81.0),
        (2, "USC00519397", "2016-08-22", Some(0.4), 76.0),
        (3, "USC00519397", "2016-08-23", Some(0.08), 80.0),
        (4, "USC00513117", "2016-08-23", Some(0.15), 77.0),
        (5, "USC00513117", "2016-12-31", None, 66.0),
        (6, "USC00514830", "2016-01-01", Some(0.02), 62.0),
        (7, "USC00514830", "2015-12-31", Some(0.5), 58.0),
        (8, "USC00517948", "2017-01-01", None, 70.0),
        (9, "USC00519281", "2017-08-22", Some(0.5), 79.0),
        (10, "USC00519281", "2016-06-15", Some(1.2), 73.0),
    ]
    .into_iter()
    .map(|(id, code, date, prcp, tobs)| Measurement {
        id,
        station_code: code.to_string(),
        date: date.to_string(),
        precipitation: prcp,
        observed_temperature: tobs,
    })
    .collect()
}

/// Single connection that never expires, so the in-memory database survives
/// for the whole test.
pub async fn empty_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("create schema");
    pool
}

pub async fn empty_repo() -> SqliteRepo {
    SqliteRepo::from_pool(empty_db().await)
}

pub async fn seeded_repo() -> SqliteRepo {
    let pool = empty_db().await;
    insert_stations(&pool, &stations()).await;
    insert_measurements(&pool, &measurements()).await;
    SqliteRepo::from_pool(pool)
}

pub async fn insert_stations(pool: &SqlitePool, stations: &[Station]) {
    for s in stations {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(s.id)
        .bind(&s.station_code)
        .bind(&s.name)
        .bind(s.latitude)
        .bind(s.longitude)
        .bind(s.elevation)
        .execute(pool)
        .await
        .expect("insert station");
    }
}

pub async fn insert_measurements(pool: &SqlitePool, rows: &[Measurement]) {
    for m in rows {
        sqlx::query(
            "INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(m.id)
        .bind(&m.station_code)
        .bind(&m.date)
        .bind(m.precipitation)
        .bind(m.observed_temperature)
        .execute(pool)
        .await
        .expect("insert measurement");
    }
}

pub fn app(repo: SqliteRepo) -> Router {
    let cfg = Config::default();
    api::router(AppState::new(cfg.clone(), Arc::new(repo)), &cfg)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, content_type, body) = get(app, uri).await;
    assert!(
        content_type.starts_with("application/json"),
        "{uri} answered {content_type}"
    );
    (status, serde_json::from_slice(&body).unwrap())
}
