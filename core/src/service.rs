//! The three public holiday operations: validate, call upstream, shape.
//!
//! Each operation comes in two forms. `fetch_*` reports every failure through
//! `HolidayError`. The `get_*`/`check_*` forms are what callers normally use:
//! they let validation failures through and turn any upstream failure into an
//! empty list or `false`, so a failed call looks the same as an empty answer.

use tracing::debug;

use crate::client::HolidayClient;
use crate::error::{HolidayError, InvalidInput};
use crate::http::{HttpRequest, HttpResponse};
use crate::shorten::shorten_public_holiday;
use crate::transport::{Transport, UreqTransport};
use crate::types::{RequestFilter, ShortPublicHoliday};
use crate::validate::validate_input;

#[derive(Debug, Clone)]
pub struct HolidayService<T> {
    client: HolidayClient,
    transport: T,
}

impl HolidayService<UreqTransport> {
    /// Service talking to `base_url` over a fresh ureq agent.
    pub fn with_ureq(base_url: &str) -> Self {
        Self::new(HolidayClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> HolidayService<T> {
    pub fn new(client: HolidayClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &HolidayClient {
        &self.client
    }

    pub fn get_list_of_public_holidays(
        &self,
        year: i32,
        country: &str,
    ) -> Result<Vec<ShortPublicHoliday>, InvalidInput> {
        or_empty(self.fetch_list_of_public_holidays(year, country), Vec::new())
    }

    /// `Ok(true)` only for an upstream 200. Negative answers and failed
    /// calls are both `Ok(false)`.
    pub fn check_if_today_is_public_holiday(&self, country: &str) -> Result<bool, InvalidInput> {
        or_empty(self.fetch_is_today_public_holiday(country), false)
    }

    pub fn get_next_public_holidays(
        &self,
        country: &str,
    ) -> Result<Vec<ShortPublicHoliday>, InvalidInput> {
        or_empty(self.fetch_next_public_holidays(country), Vec::new())
    }

    pub fn fetch_list_of_public_holidays(
        &self,
        year: i32,
        country: &str,
    ) -> Result<Vec<ShortPublicHoliday>, HolidayError> {
        validate_input(&RequestFilter::year_and_country(year, country))?;
        let response = self.send(self.client.build_public_holidays(year, country))?;
        let holidays = self.client.parse_public_holidays(response)?;
        Ok(holidays.iter().map(shorten_public_holiday).collect())
    }

    pub fn fetch_is_today_public_holiday(&self, country: &str) -> Result<bool, HolidayError> {
        validate_input(&RequestFilter::country(country))?;
        let response = self.send(self.client.build_is_today_public_holiday(country))?;
        Ok(self.client.parse_is_today_public_holiday(response)?)
    }

    pub fn fetch_next_public_holidays(
        &self,
        country: &str,
    ) -> Result<Vec<ShortPublicHoliday>, HolidayError> {
        validate_input(&RequestFilter::country(country))?;
        let response = self.send(self.client.build_next_public_holidays(country))?;
        let holidays = self.client.parse_next_public_holidays(response)?;
        Ok(holidays.iter().map(shorten_public_holiday).collect())
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, HolidayError> {
        debug!(url = %request.url, "calling upstream");
        Ok(self.transport.execute(&request)?)
    }
}

fn or_empty<V>(result: Result<V, HolidayError>, empty: V) -> Result<V, InvalidInput> {
    match result {
        Ok(value) => Ok(value),
        Err(HolidayError::InvalidInput(err)) => Err(err),
        Err(HolidayError::Upstream(_)) => Ok(empty),
    }
}
