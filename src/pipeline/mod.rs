// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod analyzer;
mod progress;

pub use analyzer::DocumentAnalyzer;
pub use progress::{AnalysisStats, ProgressTracker, StageSpinner};
