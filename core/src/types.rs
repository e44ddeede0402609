//! Domain DTOs for the upstream holiday API.
//!
//! # Design
//! These types mirror the Nager.Date schema but are defined independently of
//! the mock-server crate. Integration tests catch any schema drift between the
//! two.
//!
//! Only `name`, `localName` and `date` are required when decoding a
//! `PublicHoliday`; everything else falls back to its default so that sparse
//! upstream records still shorten cleanly.

use serde::{Deserialize, Serialize};

/// A full holiday record as returned by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub name: String,
    pub local_name: String,
    /// ISO date as sent upstream. Kept as text; never reinterpreted here.
    pub date: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
}

/// The three display fields handed to downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortPublicHoliday {
    pub name: String,
    pub local_name: String,
    pub date: String,
}

/// Caller-supplied filter, checked by [`crate::validate::validate_input`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFilter<'a> {
    pub country: Option<&'a str>,
    pub year: Option<i32>,
}

impl<'a> RequestFilter<'a> {
    pub fn country(country: &'a str) -> Self {
        Self {
            country: Some(country),
            year: None,
        }
    }

    pub fn year_and_country(year: i32, country: &'a str) -> Self {
        Self {
            country: Some(country),
            year: Some(year),
        }
    }
}
