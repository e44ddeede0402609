//! Projection of a full holiday record onto its display fields.

use crate::types::{PublicHoliday, ShortPublicHoliday};

pub fn shorten_public_holiday(holiday: &PublicHoliday) -> ShortPublicHoliday {
    ShortPublicHoliday {
        name: holiday.name.clone(),
        local_name: holiday.local_name.clone(),
        date: holiday.date.clone(),
    }
}

impl From<&PublicHoliday> for ShortPublicHoliday {
    fn from(holiday: &PublicHoliday) -> Self {
        shorten_public_holiday(holiday)
    }
}

impl From<PublicHoliday> for ShortPublicHoliday {
    fn from(holiday: PublicHoliday) -> Self {
        Self {
            name: holiday.name,
            local_name: holiday.local_name,
            date: holiday.date,
        }
    }
}
