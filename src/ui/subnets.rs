// src/ui/subnets.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::GREEN;

pub fn show_subnets_view(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.link("← Back to Categories").clicked() {
        state.wizard.back_to_categories();
    }
    ui.add_space(8.0);
    ui.heading("Select Specific Subnets");
    ui.add_space(8.0);

    let selected_categories = state.wizard.selected_categories.clone();
    egui::ScrollArea::vertical()
        .id_source("subnets_scroll")
        .show(ui, |ui| {
            for category_id in &selected_categories {
                let category = match state.catalog.category(category_id) {
                    Some(category) => category.clone(),
                    None => continue,
                };

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&category.icon).size(18.0));
                    ui.heading(&category.name);
                });
                ui.add_space(4.0);

                ui.horizontal_wrapped(|ui| {
                    for subnet_id in &category.subnets {
                        let detail = state.catalog.detail(subnet_id);
                        let selected = state.wizard.subnet_selected(subnet_id);

                        ui.group(|ui| {
                            ui.set_width(200.0);
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    let label = egui::RichText::new(subnet_id).strong();
                                    if ui.selectable_label(selected, label).clicked() {
                                        state.wizard.toggle_subnet(subnet_id);
                                    }
                                    if selected {
                                        ui.colored_label(GREEN, "✓");
                                    }
                                });
                                ui.label(&detail.name);
                                ui.small(&detail.function);
                                ui.colored_label(GREEN, format!("Free: {}", detail.free_tier));
                            });
                        });
                    }
                });
                ui.add_space(12.0);
            }
        });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        let count = state.wizard.selected_subnets.len();
        let label = if state.wizard.loading {
            "Analyzing...".to_string()
        } else {
            format!("Analyze {} Subnets →", count)
        };
        let enabled = count > 0 && !state.wizard.loading;
        if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
            state.start_analysis();
        }
    });
}
