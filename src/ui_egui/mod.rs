mod add_entry;
mod app;
mod home;
pub mod theme;

pub use add_entry::{AddEntryAction, AddEntryForm, DatePickerTarget};
pub use app::{BookingApp, Screen};
pub use home::HomeAction;
