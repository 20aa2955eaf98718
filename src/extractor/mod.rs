// file: src/extractor/mod.rs
// description: format dispatch from file extension to text extraction routine
// reference: internal module structure

pub mod docx;
pub mod pdf;
pub mod text;

use crate::error::Result;
use crate::models::{Document, DocumentFormat};
use std::path::Path;
use tracing::{debug, info};

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;
pub use text::extract_plain_text;

/// Picks an extraction routine by extension and returns the document text.
///
/// The path is expected to exist; checking that is the caller's job. An empty
/// string is a valid result and is not treated as an error here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let document = Document::from_path(path)?;
        self.extract(&document)
    }

    pub fn extract(&self, document: &Document) -> Result<String> {
        info!(
            "Extracting text from {} ({})",
            document.path.display(),
            document.format
        );

        let text = match document.format {
            DocumentFormat::Pdf => extract_pdf_text(&document.path)?,
            DocumentFormat::Docx => extract_docx_text(&document.path)?,
            DocumentFormat::Text => extract_plain_text(&document.path)?,
        };

        debug!(
            "Extracted {} characters from {}",
            text.chars().count(),
            document.display_name()
        );
        Ok(text)
    }
}
