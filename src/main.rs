#![allow(dead_code)]

mod app;
mod data;
mod gui;

use app::WindShearApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting Wind Shear Profile v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 440.0])
            .with_title("Wind Shear (Log Law)"),
        ..Default::default()
    };

    eframe::run_native(
        "Wind Shear (Log Law)",
        options,
        Box::new(|cc| Ok(Box::new(WindShearApp::new(cc)))),
    )
}
