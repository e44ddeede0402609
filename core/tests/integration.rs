//! End-to-end run of every holiday operation against the live mock server.
//!
//! # Design
//! Starts the mock upstream on a random port, then drives `HolidayService`
//! over real HTTP through `UreqTransport`. Validates request building, status
//! handling and decoding against the actual server, and catches schema drift
//! between the two crates.

use holidays_core::{ApiError, HolidayError, HolidayService, InvalidInput};
use mock_server::Store;

/// Spawn the mock server with `store` on its own runtime thread and return its base URL.
fn spawn_upstream(store: Store) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, store).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn holiday_operations_against_mock_upstream() {
    let base = spawn_upstream(Store::seeded().with_holiday_today("NL"));
    let service = HolidayService::with_ureq(&base);

    // Step 1: full 2024 calendar, shortened.
    let holidays = service.get_list_of_public_holidays(2024, "NL").unwrap();
    assert_eq!(holidays.len(), 11);
    assert_eq!(holidays[0].name, "New Year's Day");
    assert_eq!(holidays[0].local_name, "Nieuwjaarsdag");
    assert_eq!(holidays[0].date, "2024-01-01");
    assert!(holidays.iter().any(|h| h.local_name == "Koningsdag"));

    // Step 2: upcoming holidays.
    let next = service.get_next_public_holidays("NL").unwrap();
    assert_eq!(next.len(), 7);
    assert_eq!(next[0].name, "King's Day");
    assert_eq!(next[6].date, "2025-01-01");

    // Step 3: today flagged as a holiday.
    assert!(service.check_if_today_is_public_holiday("NL").unwrap());

    // Step 4: validation short-circuits before any request.
    let err = service.get_list_of_public_holidays(2000, "NL").unwrap_err();
    assert_eq!(err, InvalidInput::UnsupportedYear(2000));
    let err = service.get_next_public_holidays("PL").unwrap_err();
    assert_eq!(err.to_string(), "Country provided is not supported, received: PL");
}

#[test]
fn today_follows_upstream_flag() {
    let base = spawn_upstream(Store::seeded());
    let service = HolidayService::with_ureq(&base);

    assert!(!service.check_if_today_is_public_holiday("NL").unwrap());
    assert!(!service.fetch_is_today_public_holiday("NL").unwrap());

    // Flip the upstream flag at runtime and ask again.
    let resp = ureq::put(&format!("{base}/_mock/holiday-today/NL"))
        .send_empty()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);
    assert!(service.check_if_today_is_public_holiday("NL").unwrap());
}

#[test]
fn missing_calendar_collapses_to_empty() {
    let base = spawn_upstream(Store::default());
    let service = HolidayService::with_ureq(&base);

    assert!(service.get_list_of_public_holidays(2024, "NL").unwrap().is_empty());
    assert!(service.get_next_public_holidays("NL").unwrap().is_empty());

    let err = service.fetch_list_of_public_holidays(2024, "NL").unwrap_err();
    assert!(matches!(
        err,
        HolidayError::Upstream(ApiError::HttpError { status: 404, .. })
    ));
}

#[test]
fn unreachable_upstream_collapses_to_empty() {
    // Bind then drop to get a port nothing is listening on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let service = HolidayService::with_ureq(&format!("http://127.0.0.1:{port}"));

    assert!(service.get_list_of_public_holidays(2024, "NL").unwrap().is_empty());
    assert!(service.get_next_public_holidays("NL").unwrap().is_empty());
    assert!(!service.check_if_today_is_public_holiday("NL").unwrap());

    let err = service.fetch_next_public_holidays("NL").unwrap_err();
    assert!(matches!(err, HolidayError::Upstream(ApiError::Transport(_))));
}
