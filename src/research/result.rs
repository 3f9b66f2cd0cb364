// src/research/result.rs

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Deserialize};

use crate::config::ModelChoice;
use crate::error::ResearchError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    pub title: String,
    pub content: String,
    pub relevance: f64,
    pub source: String,
}

impl Finding {
    pub fn new(title: &str, content: &str, relevance: f64, source: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            relevance,
            source: source.to_string(),
        }
    }

    /// Header text of the collapsible block for this finding.
    pub fn heading(&self) -> String {
        format!("{} (Relevance: {})", self.title, self.relevance)
    }

    pub fn caption(&self) -> String {
        format!("Source: {}", self.source)
    }

    fn validate(&self) -> Result<(), ResearchError> {
        if !self.relevance.is_finite() || !(0.0..=1.0).contains(&self.relevance) {
            return Err(ResearchError::InvalidFinding {
                title: self.title.clone(),
                reason: format!("relevance {} is outside [0, 1]", self.relevance),
            });
        }
        Ok(())
    }
}

// Field order is the key order of the exported JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawResearchResult")]
pub struct ResearchResult {
    pub query: String,
    pub model: ModelChoice,
    pub timestamp: String,
    pub findings: Vec<Finding>,
}

impl ResearchResult {
    pub fn new(
        query: String,
        model: ModelChoice,
        timestamp: String,
        findings: Vec<Finding>,
    ) -> Result<Self, ResearchError> {
        if findings.is_empty() {
            return Err(ResearchError::InvalidFinding {
                title: String::new(),
                reason: "a research result needs at least one finding".to_string(),
            });
        }
        for finding in &findings {
            finding.validate()?;
        }
        if DateTime::parse_from_rfc3339(&timestamp).is_err() {
            return Err(ResearchError::InvalidTimestamp(timestamp));
        }

        Ok(Self { query, model, timestamp, findings })
    }

    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

// Unchecked shape of an imported result; converted through `ResearchResult::new`
#[derive(Deserialize)]
struct RawResearchResult {
    query: String,
    model: ModelChoice,
    timestamp: String,
    findings: Vec<Finding>,
}

impl TryFrom<RawResearchResult> for ResearchResult {
    type Error = ResearchError;

    fn try_from(raw: RawResearchResult) -> Result<Self, Self::Error> {
        ResearchResult::new(raw.query, raw.model, raw.timestamp, raw.findings)
    }
}
