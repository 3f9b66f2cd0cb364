// src/ui/sidebar.rs
use eframe::egui;
use crate::config::ModelChoice;
use crate::config::options::{TEMPERATURE_RANGE, TEMPERATURE_STEP, MAX_TOKENS_RANGE, MAX_TOKENS_STEP};
use crate::state::AppState;

pub fn show_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Research Options");
    ui.add_space(8.0);

    ui.label("Select AI Model");
    egui::ComboBox::from_id_source("model_select")
        .selected_text(state.options.model.label())
        .show_ui(ui, |ui| {
            for model in ModelChoice::ALL {
                ui.selectable_value(&mut state.options.model, model, model.label());
            }
        });

    ui.add_space(8.0);
    ui.add(
        egui::Slider::new(&mut state.options.temperature, TEMPERATURE_RANGE)
            .step_by(TEMPERATURE_STEP)
            .text("Temperature")
    );
    ui.add(
        egui::Slider::new(&mut state.options.max_tokens, MAX_TOKENS_RANGE)
            .step_by(MAX_TOKENS_STEP)
            .text("Max Tokens")
    );

    ui.add_space(8.0);
    ui.separator();

    ui.strong("About");
    ui.label("This tool performs deep research using OpenAI models.");
    ui.label("Data is retrieved from custom knowledge bases.");
}
