// src/ui/result.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_result_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Execution Complete");
    ui.add_space(8.0);

    let result = match &state.wizard.result {
        Some(result) => result.clone(), // Clone to avoid borrow issues
        None => return,
    };

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("Result");
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("result_scroll")
            .max_height(ui.available_height() - 64.0)
            .show(ui, |ui| {
                if let Ok(json) = serde_json::to_string_pretty(&result) {
                    ui.monospace(json);
                }
            });
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Start New Project").clicked() {
            state.reset();
        }
        if ui.button("Run Again").clicked() {
            state.wizard.run_again();
        }
    });
}
