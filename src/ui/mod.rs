// src/ui/mod.rs
use eframe::egui;

pub mod analysis;
pub mod categories;
pub mod executing;
pub mod keys;
pub mod result;
pub mod subnets;

pub const GREEN: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const AMBER: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);

// Color tokens carried by the category records
pub fn category_color(token: &str) -> egui::Color32 {
    match token {
        "blue" => egui::Color32::from_rgb(59, 130, 246),
        "green" => egui::Color32::from_rgb(34, 197, 94),
        "purple" => egui::Color32::from_rgb(168, 85, 247),
        "amber" => egui::Color32::from_rgb(245, 158, 11),
        "slate" => egui::Color32::from_rgb(100, 116, 139),
        _ => egui::Color32::GRAY,
    }
}
