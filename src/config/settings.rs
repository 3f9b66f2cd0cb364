// src/config/settings.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde::Deserialize;

use crate::error::ResearchError;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Startup configuration, read once in `main`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deep-research").join("settings.toml"))
    }

    /// Settings file first, then the environment on top. Never fails: a broken
    /// settings file is logged and the defaults are used instead.
    pub fn load() -> Self {
        let mut builder = Config::builder();
        if let Some(path) = Self::config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        let result = builder
            .set_override_option("openai_api_key", std::env::var(API_KEY_ENV).ok())
            .context("Failed to read API key from environment")
            .and_then(Self::from_builder);

        match result {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Falling back to default settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build().context("Failed to build configuration")?;
        config.try_deserialize().context("Failed to parse configuration")
    }

    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Startup problems worth telling the user about. All are non-blocking.
    pub fn validate(&self) -> Vec<ResearchError> {
        let mut warnings = Vec::new();
        if self.api_key().is_none() {
            warnings.push(ResearchError::MissingConfiguration);
        }
        warnings
    }
}
