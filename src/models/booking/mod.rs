// Booking module
// Booking entry model: a guest name and an inclusive stay range

use chrono::NaiveDate;

/// A single booking: who is staying and from when to when.
///
/// Entries are plain values. They are only built through
/// [`crate::services::validation::validate`], so a `BookingEntry` in hand
/// always has a non-blank name and a departure date that is not before the
/// arrival date. Two entries with the same three fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingEntry {
    name: String,
    arrival_date: NaiveDate,
    departure_date: NaiveDate,
}

impl BookingEntry {
    /// Assemble an entry from already-checked parts.
    pub(crate) fn from_validated(
        name: impl Into<String>,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
    ) -> Self {
        debug_assert!(departure_date >= arrival_date);
        Self {
            name: name.into(),
            arrival_date,
            departure_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Number of nights between arrival and departure (0 for a same-day booking)
    pub fn nights(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }
}
