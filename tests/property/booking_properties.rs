// Property-based tests for booking validation and the booking store

use booking_list::services::booking::BookingStore;
use booking_list::services::validation::{validate, ValidationError};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn arb_name() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z][A-Za-z ]{0,15}"
}

proptest! {
    /// Property: any non-blank name with departure >= arrival is accepted unchanged
    #[test]
    fn prop_valid_input_builds_exact_entry(
        name in arb_name(),
        arrival in arb_date(),
        nights in 0..60i64,
    ) {
        let departure = arrival + Duration::days(nights);
        let entry = validate(&name, Some(arrival), Some(departure)).unwrap();

        prop_assert_eq!(entry.name(), name.as_str());
        prop_assert_eq!(entry.arrival_date(), arrival);
        prop_assert_eq!(entry.departure_date(), departure);
        prop_assert_eq!(entry.nights(), nights);
    }

    /// Property: blank names are rejected whatever the dates
    #[test]
    fn prop_blank_name_always_rejected(
        name in "[ \t]{0,4}",
        arrival in proptest::option::of(arb_date()),
        departure in proptest::option::of(arb_date()),
    ) {
        prop_assert_eq!(validate(&name, arrival, departure), Err(ValidationError::EmptyName));
    }

    /// Property: departure before arrival is always an inverted range
    #[test]
    fn prop_departure_before_arrival_rejected(
        arrival in arb_date(),
        days_before in 1..400i64,
    ) {
        let departure = arrival - Duration::days(days_before);
        prop_assert_eq!(
            validate("Guest", Some(arrival), Some(departure)),
            Err(ValidationError::InvertedRange)
        );
    }

    /// Property: after any add/delete sequence the store matches a Vec with
    /// first-match removal, and every effective change notified exactly once
    #[test]
    fn prop_store_matches_vec_model(
        ops in proptest::collection::vec((any::<bool>(), 0..4usize), 0..40),
    ) {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let pool: Vec<_> = ["Ann", "Ben", "Cy", "Di"]
            .iter()
            .map(|name| validate(name, Some(base), Some(base + Duration::days(1))).unwrap())
            .collect();

        let mut store = BookingStore::new();
        let notifications = std::rc::Rc::new(std::cell::Cell::new(0usize));
        let counter = std::rc::Rc::clone(&notifications);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        let mut model = Vec::new();
        let mut expected_notifications = 0;
        for (is_add, index) in ops {
            let entry = &pool[index];
            if is_add {
                store.add(entry.clone());
                model.push(entry.clone());
                expected_notifications += 1;
            } else {
                let removed = store.delete(entry);
                if let Some(pos) = model.iter().position(|e| e == entry) {
                    model.remove(pos);
                    expected_notifications += 1;
                    prop_assert!(removed);
                } else {
                    prop_assert!(!removed);
                }
            }
        }

        prop_assert_eq!(store.current_entries(), model.as_slice());
        prop_assert_eq!(notifications.get(), expected_notifications);
    }
}
