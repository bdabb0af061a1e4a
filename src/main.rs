// Booking List Application
// Main entry point

use booking_list::services::settings::SettingsService;
use booking_list::ui_egui::BookingApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Booking List");

    let settings = SettingsService::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bookings")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Booking List",
        options,
        Box::new(move |cc| Ok(Box::new(BookingApp::new(cc, settings)))),
    )
}
