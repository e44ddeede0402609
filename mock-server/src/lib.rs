use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: String,
    pub local_name: String,
    pub name: String,
    pub country_code: String,
    pub fixed: bool,
    pub global: bool,
    pub counties: Option<Vec<String>>,
    pub launch_year: Option<i32>,
    pub types: Vec<String>,
}

/// In-memory stand-in for the Nager.Date dataset.
#[derive(Clone, Debug, Default)]
pub struct Store {
    /// Calendars keyed by `(year, country code)`.
    pub calendars: HashMap<(i32, String), Vec<PublicHoliday>>,
    /// Answers for `NextPublicHolidays`, keyed by country code.
    pub upcoming: HashMap<String, Vec<PublicHoliday>>,
    /// Countries for which `IsTodayPublicHoliday` answers 200.
    pub holiday_today: HashSet<String>,
}

impl Store {
    /// The Dutch 2024 calendar and the upcoming list from late April 2024.
    pub fn seeded() -> Self {
        let calendar = vec![
            dutch("2024-01-01", "Nieuwjaarsdag", "New Year's Day"),
            dutch("2024-03-29", "Goede Vrijdag", "Good Friday"),
            dutch("2024-03-31", "Eerste Paasdag", "Easter Sunday"),
            dutch("2024-04-01", "Tweede Paasdag", "Easter Monday"),
            dutch("2024-04-27", "Koningsdag", "King's Day"),
            dutch("2024-05-05", "Bevrijdingsdag", "Liberation Day"),
            dutch("2024-05-09", "Hemelvaartsdag", "Ascension Day"),
            dutch("2024-05-19", "Eerste Pinksterdag", "Pentecost"),
            dutch("2024-05-20", "Tweede Pinksterdag", "Whit Monday"),
            dutch("2024-12-25", "Eerste Kerstdag", "Christmas Day"),
            dutch("2024-12-26", "Tweede Kerstdag", "St. Stephen's Day"),
        ];
        let upcoming = vec![
            dutch("2024-04-27", "Koningsdag", "King's Day"),
            dutch("2024-05-09", "Hemelvaartsdag", "Ascension Day"),
            dutch("2024-05-19", "Eerste Pinksterdag", "Pentecost"),
            dutch("2024-05-20", "Tweede Pinksterdag", "Whit Monday"),
            dutch("2024-12-25", "Eerste Kerstdag", "Christmas Day"),
            dutch("2024-12-26", "Tweede Kerstdag", "St. Stephen's Day"),
            dutch("2025-01-01", "Nieuwjaarsdag", "New Year's Day"),
        ];

        let mut store = Self::default();
        store.calendars.insert((2024, "NL".to_string()), calendar);
        store.upcoming.insert("NL".to_string(), upcoming);
        store
    }

    pub fn with_holiday_today(mut self, country: &str) -> Self {
        self.holiday_today.insert(country.to_string());
        self
    }
}

fn dutch(date: &str, local_name: &str, name: &str) -> PublicHoliday {
    PublicHoliday {
        date: date.to_string(),
        local_name: local_name.to_string(),
        name: name.to_string(),
        country_code: "NL".to_string(),
        fixed: false,
        global: true,
        counties: None,
        launch_year: None,
        types: vec!["Public".to_string()],
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Router over the seeded store.
pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/PublicHolidays/{year}/{country}", get(public_holidays))
        .route("/IsTodayPublicHoliday/{country}", get(is_today_public_holiday))
        .route("/NextPublicHolidays/{country}", get(next_public_holidays))
        .route(
            "/_mock/holiday-today/{country}",
            put(mark_holiday_today).delete(clear_holiday_today),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn public_holidays(
    State(db): State<Db>,
    Path((year, country)): Path<(i32, String)>,
) -> Result<Json<Vec<PublicHoliday>>, StatusCode> {
    debug!(year, %country, "PublicHolidays");
    let store = db.read().await;
    store
        .calendars
        .get(&(year, country))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn is_today_public_holiday(State(db): State<Db>, Path(country): Path<String>) -> StatusCode {
    debug!(%country, "IsTodayPublicHoliday");
    if db.read().await.holiday_today.contains(&country) {
        StatusCode::OK
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn next_public_holidays(
    State(db): State<Db>,
    Path(country): Path<String>,
) -> Result<Json<Vec<PublicHoliday>>, StatusCode> {
    debug!(%country, "NextPublicHolidays");
    let store = db.read().await;
    store
        .upcoming
        .get(&country)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Test control: make `IsTodayPublicHoliday/{country}` answer 200.
async fn mark_holiday_today(State(db): State<Db>, Path(country): Path<String>) -> StatusCode {
    db.write().await.holiday_today.insert(country);
    StatusCode::NO_CONTENT
}

async fn clear_holiday_today(State(db): State<Db>, Path(country): Path<String>) -> StatusCode {
    if db.write().await.holiday_today.remove(&country) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
