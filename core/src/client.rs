//! Stateless HTTP request builder and response parser for the holiday API.
//!
//! # Design
//! `HolidayClient` holds only a `base_url`. Each upstream endpoint is split
//! into a `build_*` method that produces an `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`. Path segments are interpolated
//! exactly as received; callers validate them first.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::PublicHoliday;

/// Synchronous, stateless client for the upstream holiday API.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    base_url: String,
}

impl HolidayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_public_holidays(&self, year: i32, country: &str) -> HttpRequest {
        self.get(format!("{}/PublicHolidays/{year}/{country}", self.base_url))
    }

    pub fn build_is_today_public_holiday(&self, country: &str) -> HttpRequest {
        self.get(format!("{}/IsTodayPublicHoliday/{country}", self.base_url))
    }

    pub fn build_next_public_holidays(&self, country: &str) -> HttpRequest {
        self.get(format!("{}/NextPublicHolidays/{country}", self.base_url))
    }

    pub fn parse_public_holidays(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<PublicHoliday>, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    /// Upstream answers 200 when today is a holiday and 204 when it is not.
    pub fn parse_is_today_public_holiday(&self, response: HttpResponse) -> Result<bool, ApiError> {
        match response.status {
            200 => Ok(true),
            204 => Ok(false),
            status => Err(ApiError::HttpError {
                status,
                body: response.body,
            }),
        }
    }

    pub fn parse_next_public_holidays(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<PublicHoliday>, ApiError> {
        check_success(&response)?;
        decode(&response.body)
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
        }
    }
}

/// Any 2xx passes; the body decides whether the answer is usable.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..=299).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HolidayClient {
        HolidayClient::new("https://date.nager.at/api/v3")
    }

    #[test]
    fn build_public_holidays_produces_correct_request() {
        let req = client().build_public_holidays(2024, "NL");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://date.nager.at/api/v3/PublicHolidays/2024/NL");
    }

    #[test]
    fn build_is_today_public_holiday_produces_correct_request() {
        let req = client().build_is_today_public_holiday("NL");
        assert_eq!(req.url, "https://date.nager.at/api/v3/IsTodayPublicHoliday/NL");
    }

    #[test]
    fn build_next_public_holidays_produces_correct_request() {
        let req = client().build_next_public_holidays("NL");
        assert_eq!(req.url, "https://date.nager.at/api/v3/NextPublicHolidays/NL");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HolidayClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
        let req = client.build_next_public_holidays("NL");
        assert_eq!(req.url, "http://localhost:3001/NextPublicHolidays/NL");
    }

    #[test]
    fn parse_public_holidays_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"name":"Easter","localName":"Pascha","date":"31 March"}]"#,
        );
        let holidays = client().parse_public_holidays(response).unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].local_name, "Pascha");
    }

    #[test]
    fn parse_public_holidays_bad_json() {
        let response = HttpResponse::new(200, "error");
        let err = client().parse_public_holidays(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_public_holidays_wrong_shape() {
        let response = HttpResponse::new(200, r#"{"status":200}"#);
        let err = client().parse_public_holidays(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_public_holidays_not_found() {
        let response = HttpResponse::new(404, "");
        let err = client().parse_public_holidays(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }

    #[test]
    fn parse_public_holidays_accepts_any_2xx() {
        for status in [201, 203, 206] {
            let response = HttpResponse::new(
                status,
                r#"[{"name":"Easter","localName":"Pascha","date":"31 March"}]"#,
            );
            let holidays = client().parse_public_holidays(response).unwrap();
            assert_eq!(holidays.len(), 1, "status {status}");
        }
    }

    #[test]
    fn parse_next_public_holidays_rejects_redirect() {
        let response = HttpResponse::new(301, "");
        let err = client().parse_next_public_holidays(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 301, .. }));
    }

    #[test]
    fn parse_next_public_holidays_empty_array() {
        let response = HttpResponse::new(200, "[]");
        assert!(client().parse_next_public_holidays(response).unwrap().is_empty());
    }

    #[test]
    fn parse_is_today_distinguishes_200_and_204() {
        assert!(client()
            .parse_is_today_public_holiday(HttpResponse::new(200, ""))
            .unwrap());
        assert!(!client()
            .parse_is_today_public_holiday(HttpResponse::new(204, ""))
            .unwrap());
    }

    #[test]
    fn parse_is_today_other_status_is_error() {
        let err = client()
            .parse_is_today_public_holiday(HttpResponse::new(500, "boom"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, ref body } if body == "boom"));
    }
}
