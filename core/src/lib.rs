//! Client core for the public holidays proxy.
//!
//! # Overview
//! Validates caller filters, calls the upstream Nager.Date API and trims each
//! holiday down to `name`, `localName` and `date`.
//!
//! # Design
//! - `HolidayClient` is sans-IO: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - `Transport` is the I/O seam; `UreqTransport` is the blocking default.
//! - `HolidayService` ties validation, transport and shortening together into
//!   the three public operations.
//! - Supported country and year are the constants in [`validate`].

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod shorten;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::HolidayClient;
pub use error::{ApiError, HolidayError, InvalidInput};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::HolidayService;
pub use shorten::shorten_public_holiday;
pub use transport::{Transport, UreqTransport};
pub use types::{PublicHoliday, RequestFilter, ShortPublicHoliday};
pub use validate::{validate_input, SUPPORTED_COUNTRY, SUPPORTED_YEAR};
