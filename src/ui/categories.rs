// src/ui/categories.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::{category_color, GREEN};

pub fn show_categories_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading("What would you like to build?");
        ui.add_space(8.0);
        ui.add_sized(
            [ui.available_width().min(600.0), 28.0],
            egui::TextEdit::singleline(&mut state.wizard.query)
                .hint_text("Describe your project..."),
        );
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Select Categories");
    ui.add_space(8.0);

    let categories = state.catalog.categories.clone(); // Clone to avoid borrow issues
    egui::ScrollArea::vertical()
        .id_source("categories_scroll")
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for category in &categories {
                    let selected = state.wizard.category_selected(&category.id);

                    ui.group(|ui| {
                        ui.set_width(180.0);
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&category.icon).size(28.0));

                            let title = if selected {
                                egui::RichText::new(&category.name)
                                    .strong()
                                    .color(category_color(&category.color))
                            } else {
                                egui::RichText::new(&category.name).strong()
                            };
                            if ui.selectable_label(selected, title).clicked() {
                                state.wizard.toggle_category(&category.id);
                            }

                            ui.small(format!("{} subnets", category.subnets.len()));
                            if selected {
                                ui.colored_label(GREEN, "✓ Selected");
                            }
                        });
                    });
                }
            });
        });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        let can_continue = !state.wizard.selected_categories.is_empty();
        let button = egui::Button::new("Continue to Subnet Selection →");
        if ui.add_enabled(can_continue, button).clicked() {
            state.wizard.continue_to_subnets();
        }
    });
}
