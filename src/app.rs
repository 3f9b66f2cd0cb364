// src/app.rs
use chrono::Local;
use eframe::egui;
use rfd::FileDialog;

use crate::config::Settings;
use crate::file::{EXPORT_EXTENSION, EXPORT_FILE_NAME};
use crate::state::{AppState, Notice};
use crate::ui::{self, ResultsAction};

pub const APP_TITLE: &str = "XII-OS Deep Research";

pub struct ResearchApp {
    state: AppState,
}

impl ResearchApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let has_result = self.state.result().is_some();
                if ui.add_enabled(has_result, egui::Button::new("Export Results...")).clicked() {
                    self.export_results();
                    ui.close_menu();
                }
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
        });
    }

    fn export_results(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("JSON files", &[EXPORT_EXTENSION])
            .set_file_name(EXPORT_FILE_NAME)
            .set_title("Export Results as JSON");

        if let Some(path) = file_dialog.save_file() {
            self.state.export_to(&path);
        }
    }

    fn copy_json(&mut self, ctx: &egui::Context) {
        match self.state.export_text() {
            Some(Ok(text)) => {
                ctx.output_mut(|o| o.copied_text = text);
                self.state.celebrate("📋 Copied", "Results copied to clipboard".to_string());
            }
            Some(Err(e)) => {
                tracing::error!("Copy failed: {}", e);
                self.state.notice = Some(Notice::Error(e.to_string()));
            }
            None => {}
        }
    }

    fn show_main_view(&mut self, ui: &mut egui::Ui) -> Option<ResultsAction> {
        ui.heading(APP_TITLE);
        ui.label("Powered by OpenAI and egui");
        ui.add_space(8.0);

        for warning in &self.state.startup_warnings {
            ui::show_notice(ui, warning);
        }
        ui.add_space(8.0);

        if ui::form::show_query_form(ui, &mut self.state) {
            self.state.start_research(Local::now());
        }

        if let Some(notice) = &self.state.notice {
            ui.add_space(4.0);
            ui::show_notice(ui, notice);
        }

        ui.add_space(16.0);
        ui::results::show_results_view(ui, &self.state)
    }
}

impl eframe::App for ResearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label("XII-OS Deep Research | Tennis Tiebreaker System");
        });

        egui::SidePanel::left("research_options")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui::sidebar::show_sidebar(ui, &mut self.state);
            });

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("main_scroll")
                    .show(ui, |ui| self.show_main_view(ui))
                    .inner
            })
            .inner;

        match action {
            Some(ResultsAction::Export) => self.export_results(),
            Some(ResultsAction::CopyJson) => self.copy_json(ctx),
            None => {}
        }

        // Celebrate a finished export until dismissed
        let celebration = self.state.celebration.clone();
        if let Some(celebration) = celebration {
            egui::Window::new(&celebration.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&celebration.message);
                    if ui.button("OK").clicked() {
                        self.state.celebration = None;
                    }
                });
        }
    }
}
