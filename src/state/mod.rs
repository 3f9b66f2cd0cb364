// src/state/mod.rs
use std::path::Path;

use chrono::{DateTime, Local};

use crate::config::{ResearchOptions, Settings};
use crate::error::ResearchError;
use crate::file::{export, FileHandler, JsonResultHandler};
use crate::research::{self, ResearchResult};

/// What the results area currently shows. There is no way back to `Idle`
/// short of restarting the application.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Idle,
    ResultShown {
        result: ResearchResult,
        // Options as they were when the research was started
        options: ResearchOptions,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl From<&ResearchError> for Notice {
    fn from(error: &ResearchError) -> Self {
        if error.is_warning() {
            Notice::Warning(error.to_string())
        } else {
            Notice::Error(error.to_string())
        }
    }
}

/// Confirmation window shown after the results leave the app.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub title: String,
    pub message: String,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Form inputs
    pub query: String,
    pub options: ResearchOptions,

    pub page: PageState,

    // Inline feedback
    pub startup_warnings: Vec<Notice>,
    pub notice: Option<Notice>,
    pub celebration: Option<Celebration>,

    result_handler: JsonResultHandler,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let startup_warnings = settings.validate()
            .iter()
            .inspect(|warning| tracing::warn!("{}", warning))
            .map(Notice::from)
            .collect();

        Self {
            query: String::new(),
            options: ResearchOptions::default(),
            page: PageState::Idle,
            startup_warnings,
            notice: None,
            celebration: None,
            result_handler: JsonResultHandler::default(),
        }
    }

    pub fn result(&self) -> Option<&ResearchResult> {
        match &self.page {
            PageState::Idle => None,
            PageState::ResultShown { result, .. } => Some(result),
        }
    }

    /// "Start Research" button. A rejected or failed submission leaves the
    /// page as it was and only sets the notice.
    pub fn start_research(&mut self, now: DateTime<Local>) {
        match research::submit(&self.query, &self.options, now) {
            Ok(result) => {
                self.page = PageState::ResultShown {
                    result,
                    options: self.options.clone(),
                };
                self.notice = Some(Notice::Success("Research complete!".to_string()));
            }
            Err(e) => {
                if !e.is_warning() {
                    tracing::error!("Research failed: {}", e);
                }
                self.notice = Some(Notice::from(&e));
            }
        }
    }

    /// JSON text of the shown result, if there is one.
    pub fn export_text(&self) -> Option<Result<String, ResearchError>> {
        self.result().map(export::to_json)
    }

    pub fn export_to(&mut self, path: &Path) {
        let Some(result) = self.result() else {
            return;
        };

        match self.result_handler.save(result, path) {
            Ok(()) => {
                tracing::info!("Exported research results to {}", path.display());
                self.celebrate("🎉 Export Complete", format!("Results exported to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {:#}", e);
                self.notice = Some(Notice::Error(format!("{:#}", e)));
            }
        }
    }

    pub fn celebrate(&mut self, title: &str, message: String) {
        self.celebration = Some(Celebration {
            title: title.to_string(),
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelChoice;

    fn state_with_key() -> AppState {
        let settings = Settings {
            openai_api_key: Some("sk-test".to_string()),
            ..Settings::default()
        };
        AppState::new(&settings)
    }

    #[test]
    fn test_missing_key_becomes_startup_warning() {
        let state = AppState::new(&Settings::default());
        assert_eq!(state.startup_warnings.len(), 1);
        assert!(matches!(state.startup_warnings[0], Notice::Warning(_)));
        assert_eq!(state.page, PageState::Idle);

        assert!(state_with_key().startup_warnings.is_empty());
    }

    #[test]
    fn test_empty_submit_stays_idle() {
        let mut state = state_with_key();
        for _ in 0..3 {
            state.start_research(Local::now());
            assert_eq!(state.page, PageState::Idle);
            assert_eq!(
                state.notice,
                Some(Notice::Warning("Please enter a research query.".to_string()))
            );
        }
        assert!(state.export_text().is_none());
    }

    #[test]
    fn test_valid_submit_shows_result() {
        let mut state = state_with_key();
        state.query = "tiebreaker rules".to_string();
        state.start_research(Local::now());

        let result = state.result().expect("result shown");
        assert_eq!(result.query, "tiebreaker rules");
        assert_eq!(result.findings.len(), 2);
        assert_eq!(state.notice, Some(Notice::Success("Research complete!".to_string())));
    }

    #[test]
    fn test_resubmit_replaces_result() {
        let mut state = state_with_key();
        state.query = "first".to_string();
        state.start_research(Local::now());

        state.query = "second".to_string();
        state.options.model = ModelChoice::Gpt4;
        state.start_research(Local::now());

        let result = state.result().unwrap();
        assert_eq!(result.query, "second");
        assert_eq!(result.model, ModelChoice::Gpt4);
        match &state.page {
            PageState::ResultShown { options, .. } => assert_eq!(options.model, ModelChoice::Gpt4),
            PageState::Idle => panic!("expected a result"),
        }
    }

    #[test]
    fn test_empty_submit_keeps_previous_result() {
        let mut state = state_with_key();
        state.query = "tiebreaker rules".to_string();
        state.start_research(Local::now());

        state.query = "   ".to_string();
        state.start_research(Local::now());

        assert_eq!(state.result().unwrap().query, "tiebreaker rules");
        assert!(matches!(state.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn test_export_to_file_celebrates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::file::EXPORT_FILE_NAME);

        let mut state = state_with_key();
        state.query = "tiebreaker rules".to_string();
        state.start_research(Local::now());
        let page_before = state.page.clone();

        state.export_to(&path);

        let celebration = state.celebration.clone().expect("export celebrated");
        assert_eq!(celebration.title, "🎉 Export Complete");
        assert!(celebration.message.contains(crate::file::EXPORT_FILE_NAME));
        assert_eq!(state.page, page_before);
        let exported = state.result_handler.load(&path).unwrap();
        assert_eq!(Some(&exported), state.result());
    }

    #[test]
    fn test_celebration_keeps_its_title() {
        let mut state = state_with_key();
        state.celebrate("📋 Copied", "Results copied to clipboard".to_string());
        let celebration = state.celebration.clone().unwrap();
        assert_eq!(celebration.title, "📋 Copied");
        assert!(!celebration.title.contains("Export"));
        assert_eq!(state.page, PageState::Idle);
    }

    #[test]
    fn test_export_failure_is_inline_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let mut state = state_with_key();
        state.query = "q".to_string();
        state.start_research(Local::now());
        state.export_to(&path);

        assert!(state.celebration.is_none());
        assert!(matches!(state.notice, Some(Notice::Error(_))));
        assert!(state.result().is_some());
    }
}
