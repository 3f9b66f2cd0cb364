// src/ui/results.rs
use eframe::egui;
use crate::research::ResearchResult;
use crate::state::{AppState, PageState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsAction {
    Export,
    CopyJson,
}

pub fn show_results_view(ui: &mut egui::Ui, state: &AppState) -> Option<ResultsAction> {
    let PageState::ResultShown { result, options } = &state.page else {
        return None;
    };
    let mut action = None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Research Findings");
        ui.add_space(4.0);

        ui.strong(format!("Query: {}", result.query));
        if let Some(timestamp) = result.parsed_timestamp() {
            ui.label(format!("Completed: {}", timestamp.format("%Y-%m-%d %H:%M:%S")));
        }
        ui.label(egui::RichText::new(options.summary()).small().weak());

        ui.add_space(8.0);

        for (idx, finding) in result.findings.iter().enumerate() {
            egui::CollapsingHeader::new(finding.heading())
                .id_source(("finding", idx))
                .show(ui, |ui| {
                    ui.label(&finding.content);
                    ui.label(egui::RichText::new(finding.caption()).small().weak());
                });
        }

        ui.add_space(8.0);
        show_relevance_chart(ui, result);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("💾 Export Results as JSON").clicked() {
                action = Some(ResultsAction::Export);
            }
            if ui.button("📋 Copy JSON").clicked() {
                action = Some(ResultsAction::CopyJson);
            }
        });
    });

    action
}

fn show_relevance_chart(ui: &mut egui::Ui, result: &ResearchResult) {
    let plot = egui_plot::Plot::new("relevance_chart")
        .height(120.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0)
        .include_y(1.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = result.findings.iter()
            .enumerate()
            .map(|(i, finding)| {
                egui_plot::Bar::new(i as f64, finding.relevance)
                    .name(&finding.title)
                    .width(0.6)
                    .fill(egui::Color32::from_rgb(100, 150, 255))
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars).name("Relevance"));
    });
}
