// src/ui/keys.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::{AMBER, GREEN};

pub fn show_keys_view(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.link("← Back to Analysis").clicked() {
        state.wizard.back_to_analysis();
    }
    ui.add_space(8.0);
    ui.heading("API Key Setup");
    ui.label("Add your API keys to execute this combination. GLUE only uses these for your requests.");
    ui.add_space(8.0);

    let requirements = match &state.wizard.analysis {
        Some(analysis) => analysis.keys_required.clone(), // Clone to avoid borrow issues
        None => Vec::new(),
    };

    egui::ScrollArea::vertical()
        .id_source("keys_scroll")
        .show(ui, |ui| {
            for requirement in &requirements {
                let added = state.wizard.key_added(&requirement.subnet);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());

                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&requirement.service_name);
                            ui.small(&requirement.purpose);
                            let free_tier = if requirement.free_tier { "Yes" } else { "No" };
                            ui.colored_label(GREEN, format!("Free tier: {}", free_tier));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if added {
                                    ui.colored_label(GREEN, "✓ Added");
                                } else {
                                    ui.colored_label(AMBER, "Required");
                                }
                            },
                        );
                    });

                    if !added {
                        ui.add_space(4.0);
                        ui.hyperlink_to(
                            format!("Get {} Key ↗", requirement.service_name),
                            &requirement.key_url,
                        );

                        let draft = state
                            .key_drafts
                            .entry(requirement.subnet.clone())
                            .or_default();
                        let response = ui.add(
                            egui::TextEdit::singleline(draft)
                                .password(true)
                                .hint_text(format!("Paste {} key here", requirement.service_name)),
                        );
                        // Commit only once the field loses focus
                        if response.lost_focus() && !draft.is_empty() {
                            let value = draft.clone();
                            state.wizard.set_key(&requirement.subnet, value);
                        }

                        ui.small(format!("Setup time: ~{}", requirement.setup_time));
                    }
                });
                ui.add_space(8.0);
            }
        });

    ui.add_space(8.0);
    let all_added = state.wizard.all_keys_added();
    let label = if state.wizard.loading {
        "Executing..."
    } else if all_added {
        "Execute Combination"
    } else {
        "Add All Keys to Execute"
    };
    let enabled = all_added && !state.wizard.loading;
    let button = egui::Button::new(label);
    if ui.add_enabled(enabled, button.min_size(egui::vec2(ui.available_width(), 32.0))).clicked() {
        state.start_execution();
    }
}
