//! Booking form validation.
//! Turns raw form input into a [`BookingEntry`] or the first reason it was rejected.

use crate::models::booking::BookingEntry;
use chrono::NaiveDate;
use thiserror::Error;

/// Why a booking form was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name")]
    EmptyName,
    #[error("Please select both an arrival and a departure date")]
    MissingDateRange,
    #[error("Departure date cannot be before arrival date")]
    InvertedRange,
}

/// Validate booking form input and build the entry.
///
/// Checks run in a fixed order and stop at the first failure:
/// name, then presence of both dates, then date order. A departure on the
/// arrival day is accepted. The name is stored exactly as given.
///
/// # Examples
/// ```
/// use booking_list::services::validation::{validate, ValidationError};
/// use chrono::NaiveDate;
///
/// let arrival = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let departure = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
///
/// let entry = validate("Alice", Some(arrival), Some(departure)).unwrap();
/// assert_eq!(entry.nights(), 4);
///
/// assert_eq!(validate("  ", Some(arrival), Some(departure)), Err(ValidationError::EmptyName));
/// ```
pub fn validate(
    name: &str,
    arrival_date: Option<NaiveDate>,
    departure_date: Option<NaiveDate>,
) -> Result<BookingEntry, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let (Some(arrival), Some(departure)) = (arrival_date, departure_date) else {
        return Err(ValidationError::MissingDateRange);
    };

    if departure < arrival {
        return Err(ValidationError::InvertedRange);
    }

    Ok(BookingEntry::from_validated(name, arrival, departure))
}
