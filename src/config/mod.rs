// src/config/mod.rs
pub mod settings;
pub mod options;

// Re-export commonly used types
pub use settings::Settings;
pub use options::{ResearchOptions, ModelChoice, SearchDepth, Domain};
