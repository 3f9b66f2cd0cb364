// src/ui/mod.rs
use eframe::egui;
use crate::state::Notice;

pub mod sidebar;
pub mod form;
pub mod results;

pub use results::ResultsAction;

pub fn show_notice(ui: &mut egui::Ui, notice: &Notice) {
    let (color, icon, text) = match notice {
        Notice::Success(text) => (egui::Color32::GREEN, "✔", text),
        Notice::Warning(text) => (egui::Color32::YELLOW, "⚠", text),
        Notice::Error(text) => (egui::Color32::RED, "❌", text),
    };
    ui.colored_label(color, format!("{} {}", icon, text));
}
