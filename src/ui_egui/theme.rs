//! Theme selection for the egui booking application

use crate::models::settings::Settings;

/// Apply light or dark visuals according to settings
pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    if settings.is_dark_theme() {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
