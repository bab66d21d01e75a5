// src/ui/executing.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::GREEN;

pub fn show_executing_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.heading("Executing via BRAID");
        ui.label(format!(
            "Orchestrating {} subnets...",
            state.wizard.selected_subnets.len()
        ));
        ui.add_space(16.0);

        ui.group(|ui| {
            ui.set_width(360.0);
            for subnet in &state.wizard.selected_subnets {
                ui.horizontal(|ui| {
                    ui.colored_label(GREEN, "✓");
                    ui.label(subnet);
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.small("Complete");
                        },
                    );
                });
            }
        });
    });
}
