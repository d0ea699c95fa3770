// Sprint Snapshot Application
// Main entry point

use sprint_snapshot::ui_egui::SnapshotApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Sprint Snapshot Dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1160.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Daily Sprint Snapshot",
        options,
        Box::new(|cc| Ok(Box::new(SnapshotApp::new(cc)?))),
    )
}
