//! In-memory booking store.
//! Owns the ordered list of bookings and notifies subscribers after every change.

use crate::models::booking::BookingEntry;
use std::collections::BTreeMap;
use std::fmt;

type Observer = Box<dyn FnMut(&[BookingEntry])>;

/// Handle returned by [`BookingStore::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subscription(u64);

/// Ordered, in-memory list of bookings.
///
/// Insertion order is kept and value-equal duplicates are allowed. The store
/// lives on the UI thread: mutation goes through `&mut self` and observers are
/// called synchronously, in subscription order, once the list has been updated.
#[derive(Default)]
pub struct BookingStore {
    entries: Vec<BookingEntry>,
    observers: BTreeMap<Subscription, Observer>,
    next_subscription: u64,
}

impl BookingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bookings in insertion order
    pub fn current_entries(&self) -> &[BookingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a booking to the end of the list.
    pub fn add(&mut self, entry: BookingEntry) {
        log::debug!(
            "Adding booking for '{}' ({} - {})",
            entry.name(),
            entry.arrival_date(),
            entry.departure_date()
        );
        self.entries.push(entry);
        self.notify();
    }

    /// Remove the first booking equal to `entry`.
    ///
    /// Returns `false` and leaves the list untouched (no notification) when
    /// there is no such booking.
    pub fn delete(&mut self, entry: &BookingEntry) -> bool {
        let Some(index) = self.entries.iter().position(|e| e == entry) else {
            log::debug!("Delete ignored, no booking for '{}'", entry.name());
            return false;
        };

        self.entries.remove(index);
        log::debug!("Deleted booking for '{}' at position {}", entry.name(), index);
        self.notify();
        true
    }

    /// Register a callback that receives the full list after every change.
    ///
    /// The callback is not invoked with the current state on registration;
    /// read [`current_entries`](Self::current_entries) for that.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&[BookingEntry]) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.insert(subscription, Box::new(observer));
        subscription
    }

    /// Remove a previously registered callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.remove(&subscription).is_some()
    }

    fn notify(&mut self) {
        let entries = &self.entries;
        for observer in self.observers.values_mut() {
            observer(entries);
        }
    }
}

impl fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingStore")
            .field("entries", &self.entries)
            .field("observers", &self.observers.len())
            .finish()
    }
}
