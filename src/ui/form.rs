// src/ui/form.rs
use eframe::egui;
use egui_extras::DatePickerButton;
use crate::config::{Domain, SearchDepth};
use crate::state::AppState;

/// Query box, advanced options and the start button. Returns true when
/// "Start Research" was clicked this frame.
pub fn show_query_form(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.label("Enter your research query:");
    ui.add(
        egui::TextEdit::multiline(&mut state.query)
            .desired_rows(5)
            .desired_width(f32::INFINITY)
            .hint_text("e.g. tiebreaker rules")
    );

    ui.add_space(8.0);

    egui::CollapsingHeader::new("Advanced Options")
        .id_source("advanced_options")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Search Depth:");
                for depth in SearchDepth::ALL {
                    ui.selectable_value(&mut state.options.search_depth, depth, format!("{:?}", depth));
                }
            });

            ui.checkbox(&mut state.options.include_citations, "Include Citations");
            ui.add_space(4.0);

            ui.columns(2, |columns| {
                columns[0].label("Limit to Domains");
                for domain in Domain::ALL {
                    let mut selected = state.options.domains.contains(&domain);
                    if columns[0].checkbox(&mut selected, format!("{:?}", domain)).changed() {
                        state.options.toggle_domain(domain);
                    }
                }

                columns[1].label("Date Range");
                columns[1].horizontal(|ui| {
                    ui.add(DatePickerButton::new(&mut state.options.date_range.start).id_source("date_start"));
                    ui.label("to");
                    ui.add(DatePickerButton::new(&mut state.options.date_range.end).id_source("date_end"));
                });
            });

            state.options.date_range.normalize();
        });

    ui.add_space(8.0);
    ui.button("🔍 Start Research").clicked()
}
