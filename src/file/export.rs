// src/file/export.rs
use super::FileHandler;
use crate::error::ResearchError;
use crate::research::ResearchResult;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

pub const EXPORT_EXTENSION: &str = "json";
pub const EXPORT_FILE_NAME: &str = "research_results.json";

/// Serializes a result the way it is exported: UTF-8 JSON, 2-space indent.
pub fn to_json(result: &ResearchResult) -> Result<String, ResearchError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Parses an exported result. Goes through the same checks as a fresh
/// submission, so empty findings or a bad relevance are rejected here too.
pub fn from_json(content: &str) -> Result<ResearchResult, ResearchError> {
    Ok(serde_json::from_str(content)?)
}

#[derive(Debug, Default)]
pub struct JsonResultHandler;

impl FileHandler<ResearchResult> for JsonResultHandler {
    fn load(&self, path: &Path) -> Result<ResearchResult> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        from_json(&content).context("Failed to parse research results")
    }

    fn save(&self, data: &ResearchResult, path: &Path) -> Result<()> {
        let content = to_json(data)?;
        fs::write(path, content)
            .map_err(ResearchError::from)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        Ok(())
    }
}
