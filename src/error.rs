// src/error.rs
use thiserror::Error;

/// Everything that can go wrong on the research page. None of these are fatal;
/// the UI turns each one into an inline notice.
#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("Please enter a research query.")]
    EmptyQuery,

    #[error("OpenAI API key not found. Some features may be limited.")]
    MissingConfiguration,

    #[error("Error during research: invalid finding '{title}': {reason}")]
    InvalidFinding { title: String, reason: String },

    #[error("Error during research: timestamp '{0}' is not RFC 3339")]
    InvalidTimestamp(String),

    #[error("Failed to serialize research results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write research results: {0}")]
    Io(#[from] std::io::Error),
}

impl ResearchError {
    /// Warnings are shown in yellow and block nothing; the rest are errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, ResearchError::EmptyQuery | ResearchError::MissingConfiguration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_classification() {
        assert!(ResearchError::EmptyQuery.is_warning());
        assert!(ResearchError::MissingConfiguration.is_warning());
        let invalid = ResearchError::InvalidFinding {
            title: "x".to_string(),
            reason: "relevance out of range".to_string(),
        };
        assert!(!invalid.is_warning());
    }

    #[test]
    fn test_empty_query_message() {
        assert_eq!(ResearchError::EmptyQuery.to_string(), "Please enter a research query.");
    }
}
