//! HTTP front for the public holidays proxy.
//!
//! # Overview
//! Exposes the three `HolidayService` operations as JSON endpoints. Filters
//! arrive as path segments and go to the service untouched; validation
//! failures become `400` with the validator message, while upstream failures
//! have already been collapsed into `[]` / `false` by the service.
//!
//! # Design
//! The service is blocking (ureq), so every call runs on tokio's blocking pool.
//! The router is generic over `Transport` so tests can swap the upstream out.

pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use holidays_core::{HolidayService, ShortPublicHoliday, Transport};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use config::{Config, ConfigError};
pub use error::{ErrorBody, GatewayError};

pub type SharedService<T> = Arc<HolidayService<T>>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub is_public_holiday: bool,
}

pub fn app<T>(service: HolidayService<T>) -> Router
where
    T: Transport + Send + Sync + 'static,
{
    let service: SharedService<T> = Arc::new(service);
    Router::new()
        .route("/health", get(health))
        .route("/public-holidays/{year}/{country}", get(public_holidays::<T>))
        .route("/is-today-public-holiday/{country}", get(is_today_public_holiday::<T>))
        .route("/next-public-holidays/{country}", get(next_public_holidays::<T>))
        .with_state(service)
}

pub async fn run<T>(listener: TcpListener, service: HolidayService<T>) -> Result<(), std::io::Error>
where
    T: Transport + Send + Sync + 'static,
{
    axum::serve(listener, app(service)).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn public_holidays<T>(
    State(service): State<SharedService<T>>,
    Path((year, country)): Path<(i32, String)>,
) -> Result<Json<Vec<ShortPublicHoliday>>, GatewayError>
where
    T: Transport + Send + Sync + 'static,
{
    let holidays =
        blocking(move || service.get_list_of_public_holidays(year, &country)).await??;
    Ok(Json(holidays))
}

async fn is_today_public_holiday<T>(
    State(service): State<SharedService<T>>,
    Path(country): Path<String>,
) -> Result<Json<TodayResponse>, GatewayError>
where
    T: Transport + Send + Sync + 'static,
{
    let is_public_holiday =
        blocking(move || service.check_if_today_is_public_holiday(&country)).await??;
    Ok(Json(TodayResponse { is_public_holiday }))
}

async fn next_public_holidays<T>(
    State(service): State<SharedService<T>>,
    Path(country): Path<String>,
) -> Result<Json<Vec<ShortPublicHoliday>>, GatewayError>
where
    T: Transport + Send + Sync + 'static,
{
    let holidays = blocking(move || service.get_next_public_holidays(&country)).await??;
    Ok(Json(holidays))
}

async fn blocking<F, R>(f: F) -> Result<R, GatewayError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await?)
}
