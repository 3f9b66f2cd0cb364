// src/config/options.rs
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Local, NaiveDate};
use serde::{Serialize, Deserialize};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const TEMPERATURE_STEP: f64 = 0.1;
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 100..=4000;
pub const MAX_TOKENS_STEP: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [ModelChoice::Gpt4o, ModelChoice::Gpt4, ModelChoice::Gpt35Turbo];

    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::Gpt4o => "gpt-4o",
            ModelChoice::Gpt4 => "gpt-4",
            ModelChoice::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Ordered from shallowest to deepest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SearchDepth {
    #[default]
    Basic,
    Standard,
    Deep,
    Comprehensive,
}

impl SearchDepth {
    pub const ALL: [SearchDepth; 4] = [
        SearchDepth::Basic,
        SearchDepth::Standard,
        SearchDepth::Deep,
        SearchDepth::Comprehensive,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    Tennis,
    Sports,
    Rules,
    History,
    Statistics,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Tennis,
        Domain::Sports,
        Domain::Rules,
        Domain::History,
        Domain::Statistics,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Keeps `end` on or after `start`, moving `end` forward if needed.
    pub fn normalize(&mut self) {
        if self.end < self.start {
            self.end = self.start;
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            end: Local::now().date_naive(),
        }
    }
}

/// The controls collected by the form. Only `model` ends up in the result,
/// and none of them influence the findings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchOptions {
    pub model: ModelChoice,
    pub temperature: f64,
    pub max_tokens: u32,
    pub search_depth: SearchDepth,
    pub include_citations: bool,
    pub domains: BTreeSet<Domain>,
    pub date_range: DateRange,
}

impl Default for ResearchOptions {
    fn default() -> Self {
        Self {
            model: ModelChoice::default(),
            temperature: 0.7,
            max_tokens: 1500,
            search_depth: SearchDepth::default(),
            include_citations: true,
            domains: BTreeSet::new(),
            date_range: DateRange::default(),
        }
    }
}

impl ResearchOptions {
    pub fn toggle_domain(&mut self, domain: Domain) {
        if !self.domains.remove(&domain) {
            self.domains.insert(domain);
        }
    }

    /// One-line description of the requested parameters for the results view.
    pub fn summary(&self) -> String {
        let domains = if self.domains.is_empty() {
            "All".to_string()
        } else {
            self.domains.iter()
                .map(|d| format!("{:?}", d))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Model: {} | Temperature: {:.1} | Max Tokens: {} | Depth: {:?} | Citations: {} | Domains: {} | Dates: {} to {}",
            self.model,
            self.temperature,
            self.max_tokens,
            self.search_depth,
            if self.include_citations { "Yes" } else { "No" },
            domains,
            self.date_range.start.format("%Y-%m-%d"),
            self.date_range.end.format("%Y-%m-%d"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let options = ResearchOptions::default();
        assert_eq!(options.model, ModelChoice::Gpt4o);
        assert_eq!(options.temperature, 0.7);
        assert_eq!(options.max_tokens, 1500);
        assert_eq!(options.search_depth, SearchDepth::Basic);
        assert!(options.include_citations);
        assert!(options.domains.is_empty());
        assert_eq!(options.date_range.start, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert!(TEMPERATURE_RANGE.contains(&options.temperature));
        assert!(MAX_TOKENS_RANGE.contains(&options.max_tokens));
    }

    #[test]
    fn test_model_labels_serialize_as_shown() {
        for model in ModelChoice::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.label()));
        }
    }

    #[test]
    fn test_search_depth_is_ordered() {
        assert!(SearchDepth::Basic < SearchDepth::Standard);
        assert!(SearchDepth::Deep < SearchDepth::Comprehensive);
    }

    #[test]
    fn test_toggle_domain() {
        let mut options = ResearchOptions::default();
        options.toggle_domain(Domain::Rules);
        options.toggle_domain(Domain::Tennis);
        assert_eq!(options.domains.iter().copied().collect::<Vec<_>>(), vec![Domain::Tennis, Domain::Rules]);
        options.toggle_domain(Domain::Rules);
        assert!(!options.domains.contains(&Domain::Rules));
    }

    #[test]
    fn test_date_range_normalize() {
        let mut range = DateRange {
            start: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        };
        range.normalize();
        assert_eq!(range.end, range.start);
    }

    #[test]
    fn test_summary_lists_parameters() {
        let mut options = ResearchOptions::default();
        options.model = ModelChoice::Gpt4;
        options.toggle_domain(Domain::History);
        let summary = options.summary();
        assert!(summary.contains("Model: gpt-4 "));
        assert!(summary.contains("Domains: History"));
        assert!(summary.contains("Dates: 2000-01-01 to"));
    }
}
