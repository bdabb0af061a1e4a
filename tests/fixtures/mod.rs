// Test fixtures - reusable test data
// Provides consistent bookings across all test files

#![allow(dead_code)]

use booking_list::models::booking::BookingEntry;
use booking_list::services::validation::validate;
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Returns Jan 5, 2025
    pub fn jan_5_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample bookings for testing
pub mod bookings {
    use super::*;

    /// Four nights at the start of January
    pub fn alice_new_year() -> BookingEntry {
        validate("Alice", Some(dates::jan_1_2025()), Some(dates::jan_5_2025())).unwrap()
    }

    /// Same-day visit over the leap day
    pub fn bob_day_visit() -> BookingEntry {
        validate("Bob", Some(dates::leap_day_2024()), Some(dates::leap_day_2024())).unwrap()
    }

    /// Stay that crosses the year boundary
    pub fn carol_year_end() -> BookingEntry {
        validate(
            "Carol",
            Some(dates::new_years_eve_2025()),
            Some(dates::new_years_eve_2025() + chrono::Duration::days(3)),
        )
        .unwrap()
    }
}
