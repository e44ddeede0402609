//! Filter validation against the single supported country and year.

use crate::error::InvalidInput;
use crate::types::RequestFilter;

/// The only country code the service forwards upstream.
pub const SUPPORTED_COUNTRY: &str = "NL";

/// The only year the service forwards upstream.
pub const SUPPORTED_YEAR: i32 = 2024;

/// Check `filter` against [`SUPPORTED_COUNTRY`] and [`SUPPORTED_YEAR`].
///
/// Absent fields always pass. Country is checked before year, so a filter
/// with both fields wrong reports the country.
pub fn validate_input(filter: &RequestFilter<'_>) -> Result<(), InvalidInput> {
    if let Some(country) = filter.country {
        if country != SUPPORTED_COUNTRY {
            return Err(InvalidInput::UnsupportedCountry(country.to_string()));
        }
    }
    if let Some(year) = filter.year {
        if year != SUPPORTED_YEAR {
            return Err(InvalidInput::UnsupportedYear(year));
        }
    }
    Ok(())
}
