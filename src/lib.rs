// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod inference;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{AnalysisConfig, Config, InferenceConfig, ModelsConfig};
pub use error::{AnalyzerError, ErrorKind, Result};
pub use exporter::{ConsoleRenderer, JsonExporter};
pub use extractor::TextExtractor;
pub use inference::{
    GenerationParams, HostedInferenceProvider, InferenceHandle, InferenceOutput,
    InferenceProvider, InferenceTask, ModelAccessor,
};
pub use models::{AnalysisReport, Document, DocumentFormat, EntityMap, TokenSpan};
pub use pipeline::{AnalysisStats, DocumentAnalyzer, ProgressTracker};
pub use utils::{OperationTimer, Validator};
