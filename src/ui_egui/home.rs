use crate::models::booking::BookingEntry;
use crate::models::settings::Settings;
use crate::utils::date::{format_range, nights_label};
use egui::{Color32, RichText};

pub enum HomeAction {
    None,
    OpenAddScreen,
    Delete(BookingEntry),
}

/// Render the booking list
pub fn render_home(ui: &mut egui::Ui, entries: &[BookingEntry], settings: &Settings) -> HomeAction {
    let mut action = HomeAction::None;

    ui.horizontal(|ui| {
        ui.heading("Bookings");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Add booking").clicked() {
                action = HomeAction::OpenAddScreen;
            }
        });
    });
    ui.separator();

    if entries.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No bookings yet").weak());
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for (index, entry) in entries.iter().enumerate() {
                // Duplicates are allowed, so the row index keeps widget ids distinct
                ui.push_id(index, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(entry.name()).strong());
                                ui.label(format_range(
                                    entry.arrival_date(),
                                    entry.departure_date(),
                                    &settings.date_format,
                                ));
                                ui.label(RichText::new(nights_label(entry.nights())).small());
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .button(RichText::new("Delete").color(Color32::RED))
                                        .clicked()
                                    {
                                        action = HomeAction::Delete(entry.clone());
                                    }
                                },
                            );
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });

    action
}
