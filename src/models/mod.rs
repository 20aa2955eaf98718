// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod entity;
pub mod report;

pub use document::{Document, DocumentFormat};
pub use entity::{EntityMap, TokenSpan};
pub use report::AnalysisReport;
