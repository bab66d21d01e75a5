// src/ui/analysis.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::{AMBER, GREEN};

pub fn show_analysis_view(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.link("← Back to Subnets").clicked() {
        state.wizard.back_to_subnets();
    }
    ui.add_space(8.0);

    let analysis = match &state.wizard.analysis {
        Some(analysis) => analysis.clone(), // Clone to avoid borrow issues
        None => return,
    };

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            let glyph = if analysis.feasible { "✅" } else { "⚠" };
            ui.label(egui::RichText::new(glyph).size(28.0));
            ui.vertical(|ui| {
                ui.heading(if analysis.feasible { "Feasible" } else { "Needs Attention" });
                ui.label(&analysis.summary);
            });
        });

        if !analysis.issues.is_empty() {
            ui.add_space(8.0);
            ui.colored_label(AMBER, "Issues Found");
            for issue in &analysis.issues {
                ui.group(|ui| {
                    ui.label(format!("{}: {}", issue.kind, issue.description));
                    ui.small(format!("Suggestion: {}", issue.suggestion));
                });
            }
        }

        ui.add_space(8.0);
        ui.colored_label(GREEN, "Cost Breakdown");
        egui::Grid::new("analysis_cost_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Free tier available:");
                let free_tier = if analysis.cost.free_tier_available { "Yes" } else { "Limited" };
                ui.colored_label(GREEN, free_tier);
                ui.end_row();

                ui.label("Cost per request:");
                ui.colored_label(GREEN, format!("${}", analysis.cost.cost_per_request));
                ui.end_row();

                for line in &analysis.cost.breakdown {
                    ui.label(format!("{}:", line.subnet));
                    ui.label(&line.cost);
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        let button = egui::Button::new("Continue to API Key Setup →");
        if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
            state.wizard.continue_to_keys();
        }
    });
}
