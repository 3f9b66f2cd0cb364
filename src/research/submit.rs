// src/research/submit.rs

use chrono::{DateTime, Local};

use crate::config::ResearchOptions;
use crate::error::ResearchError;
use super::findings::mock_findings;
use super::result::ResearchResult;

/// Handles a click on "Start Research".
///
/// Blank queries are rejected with [`ResearchError::EmptyQuery`]. Anything
/// else produces a fresh result carrying the query exactly as typed, the
/// selected model and `now`. The remaining options are accepted but have no
/// effect on the findings.
pub fn submit(
    query: &str,
    options: &ResearchOptions,
    now: DateTime<Local>,
) -> Result<ResearchResult, ResearchError> {
    if query.trim().is_empty() {
        tracing::warn!("Rejected research request with an empty query");
        return Err(ResearchError::EmptyQuery);
    }

    tracing::info!(
        model = %options.model,
        search_depth = ?options.search_depth,
        query_len = query.len(),
        "Starting research"
    );

    ResearchResult::new(
        query.to_string(),
        options.model,
        now.to_rfc3339(),
        mock_findings(),
    )
}
