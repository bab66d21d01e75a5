// src/main.rs
use eframe::egui;
use anyhow::Result;

mod analysis;
mod app;
mod catalog;
mod file;
mod state;
mod ui;

use app::GlueApp;
use catalog::Catalog;

fn main() -> Result<()> {
    env_logger::init();

    let catalog = Catalog::builtin()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("GLUE"),
        ..Default::default()
    };

    eframe::run_native(
        "GLUE",
        options,
        Box::new(|_cc| Box::new(GlueApp::new(catalog))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
