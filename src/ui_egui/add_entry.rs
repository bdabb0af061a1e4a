use crate::models::booking::BookingEntry;
use crate::models::settings::Settings;
use crate::services::validation::{validate, ValidationError};
use crate::utils::date::{format_date, nights_label};
use chrono::NaiveDate;
use egui::{Color32, RichText};
use egui_extras::DatePickerButton;

/// Which end of the stay a picker edits
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DatePickerTarget {
    Arrival,
    Departure,
}

/// Raw input of the add screen.
///
/// Dates stay `None` until the user picks one, so an untouched picker is
/// reported as a missing range instead of silently defaulting to today.
#[derive(Debug, Clone)]
pub struct AddEntryForm {
    pub name: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub error: Option<ValidationError>,
    /// Dates shown by the picker buttons before anything has been chosen
    arrival_picker: NaiveDate,
    departure_picker: NaiveDate,
}

impl AddEntryForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            arrival_date: None,
            departure_date: None,
            error: None,
            arrival_picker: today,
            departure_picker: today,
        }
    }

    pub fn pick(&mut self, target: DatePickerTarget, date: NaiveDate) {
        match target {
            DatePickerTarget::Arrival => {
                self.arrival_picker = date;
                self.arrival_date = Some(date);
                // Open the departure calendar near the arrival day
                if self.departure_date.is_none() {
                    self.departure_picker = date;
                }
            }
            DatePickerTarget::Departure => {
                self.departure_picker = date;
                self.departure_date = Some(date);
            }
        }
    }

    /// Validate the current input, remembering the error for display.
    pub fn submit(&mut self) -> Result<BookingEntry, ValidationError> {
        let result = validate(&self.name, self.arrival_date, self.departure_date);
        self.error = result.as_ref().err().copied();
        result
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

pub enum AddEntryAction {
    None,
    Saved(BookingEntry),
    Cancelled,
}

/// Render the add screen
pub fn render_add_entry(
    ui: &mut egui::Ui,
    form: &mut AddEntryForm,
    settings: &Settings,
) -> AddEntryAction {
    let mut action = AddEntryAction::None;

    ui.heading("New booking");
    ui.add_space(8.0);

    if let Some(error) = form.error {
        ui.colored_label(Color32::RED, RichText::new(error.to_string()).strong());
        ui.add_space(8.0);
    }

    ui.label("Name");
    ui.add(
        egui::TextEdit::singleline(&mut form.name)
            .desired_width(f32::INFINITY)
            .hint_text("Guest name"),
    );
    ui.add_space(12.0);

    render_date_row(ui, form, DatePickerTarget::Arrival, settings);
    render_date_row(ui, form, DatePickerTarget::Departure, settings);

    if let (Some(arrival), Some(departure)) = (form.arrival_date, form.departure_date) {
        if departure >= arrival {
            ui.label(nights_label((departure - arrival).num_days()));
        }
    }

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            match form.submit() {
                Ok(entry) => action = AddEntryAction::Saved(entry),
                Err(err) => log::debug!("Booking form rejected: {}", err),
            }
        }

        if ui.button("Cancel").clicked() {
            action = AddEntryAction::Cancelled;
        }
    });

    action
}

fn render_date_row(
    ui: &mut egui::Ui,
    form: &mut AddEntryForm,
    target: DatePickerTarget,
    settings: &Settings,
) {
    let (label, id, selected, mut picked) = match target {
        DatePickerTarget::Arrival => (
            "Arrival",
            "arrival_date",
            form.arrival_date,
            form.arrival_picker,
        ),
        DatePickerTarget::Departure => (
            "Departure",
            "departure_date",
            form.departure_date,
            form.departure_picker,
        ),
    };

    ui.horizontal(|ui| {
        ui.label(format!("{}:", label));
        match selected {
            Some(date) => ui.label(RichText::new(format_date(date, &settings.date_format)).strong()),
            None => ui.label(RichText::new("not selected").weak()),
        };
        if ui
            .add(DatePickerButton::new(&mut picked).id_source(id))
            .changed()
        {
            form.pick(target, picked);
        }
    });
}
