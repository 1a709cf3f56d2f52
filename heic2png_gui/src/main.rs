#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod controller;

use heic_core::{ConvertError, InstanceGuard};

const INSTANCE_LOCK_NAME: &str = "heic2png-gui";

fn main() -> eframe::Result<()> {
    let _ = heic_core::logging::init_logging(
        "heic2png_gui",
        heic_core::logging::LogConfig::default(),
    );

    // Acquired before any UI exists and held until process exit.
    let _instance = match InstanceGuard::acquire(INSTANCE_LOCK_NAME) {
        Ok(guard) => guard,
        Err(e @ ConvertError::AlreadyRunning) => {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Error")
                .set_description(e.to_string())
                .show();
            std::process::exit(1);
        }
        Err(e) => {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Error")
                .set_description(format!("Failed to start: {}", e))
                .show();
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 440.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HEIC to PNG Converter",
        options,
        Box::new(|_cc| Ok(Box::new(app::ConverterApp::default()))),
    )
}
