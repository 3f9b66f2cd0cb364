// src/research/mod.rs
pub mod result;
pub mod findings;
pub mod submit;

// Re-export commonly used types
pub use result::ResearchResult;
pub use submit::submit;
