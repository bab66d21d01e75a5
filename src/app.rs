// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::catalog::Catalog;
use crate::file::{CatalogFileHandler, FileHandler};
use crate::state::{AppState, Step};

pub struct GlueApp {
    state: AppState,
    catalog_handler: CatalogFileHandler,
}

impl GlueApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: AppState::new(catalog),
            catalog_handler: CatalogFileHandler::new(),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Project").clicked() {
                    self.state.reset();
                    ui.close_menu();
                }
                if ui.button("Load Catalog...").clicked() {
                    self.load_catalog();
                    ui.close_menu();
                }
                if ui.button("Export Catalog...").clicked() {
                    self.export_catalog();
                    ui.close_menu();
                }
            });
        });
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mark = egui::RichText::new("G")
                .strong()
                .size(22.0)
                .color(egui::Color32::from_rgb(59, 130, 246));
            ui.label(mark);
            ui.heading("GLUE");
            ui.label("One prompt. All 129 subnets.");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(step_caption(self.state.wizard.step));
            });
        });
    }

    fn load_catalog(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("RON files", &["ron"])
            .set_title("Open Catalog File");

        if let Some(path) = file_dialog.pick_file() {
            match self.catalog_handler.load(&path) {
                Ok(catalog) => {
                    log::info!("Loaded catalog from {}", path.display());
                    self.state.catalog = catalog;
                    // Selections may reference the old catalog; start over
                    self.state.reset();
                }
                Err(e) => {
                    log::warn!("Catalog load failed: {:#}", e);
                    self.state.error_message = Some(format!("Error loading catalog: {}", e));
                }
            }
        }
    }

    fn export_catalog(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("RON files", &["ron"])
            .set_file_name("catalog.ron")
            .set_title("Export Catalog As");

        if let Some(path) = file_dialog.save_file() {
            if let Err(e) = self.catalog_handler.save(&self.state.catalog, &path) {
                log::warn!("Catalog export failed: {:#}", e);
                self.state.error_message = Some(format!("Error exporting catalog: {}", e));
            }
        }
    }
}

fn step_caption(step: Step) -> &'static str {
    match step {
        Step::Categories => "Step 1: Select Categories",
        Step::Subnets => "Step 2: Choose Subnets",
        Step::Analysis => "Step 3: Review Analysis",
        Step::Keys => "Step 4: Add API Keys",
        Step::Executing => "Step 5: Executing...",
        Step::Result => "Complete",
    }
}

impl eframe::App for GlueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.wizard.step {
                Step::Categories => {
                    crate::ui::categories::show_categories_view(ui, &mut self.state);
                },
                Step::Subnets => {
                    crate::ui::subnets::show_subnets_view(ui, &mut self.state);
                },
                Step::Analysis => {
                    crate::ui::analysis::show_analysis_view(ui, &mut self.state);
                },
                Step::Keys => {
                    crate::ui::keys::show_keys_view(ui, &mut self.state);
                },
                Step::Executing => {
                    crate::ui::executing::show_executing_view(ui, &mut self.state);
                },
                Step::Result => {
                    crate::ui::result::show_result_view(ui, &mut self.state);
                },
            }
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }

        // Keep frames coming while a mock call is in flight
        if let Some(task) = &self.state.pending {
            ctx.request_repaint_after(task.remaining());
        }
    }
}
