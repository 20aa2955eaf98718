// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use crate::inference::InferenceTask;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PDF extraction failed for {path}: {source}")]
    Pdf {
        path: PathBuf,
        source: lopdf::Error,
    },

    #[error("DOCX archive error in {path}: {source}")]
    DocxArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("DOCX markup error in {path}: {source}")]
    DocxXml {
        path: PathBuf,
        source: quick_xml::Error,
    },

    #[error("Inference error ({task}): {message}")]
    Inference { task: InferenceTask, message: String },

    #[error("Inference request failed ({task}): {source}")]
    InferenceHttp {
        task: InferenceTask,
        source: reqwest::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification used by callers to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    ExtractionFailure,
    InferenceFailure,
    Other,
}

impl AnalyzerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::FileOperation { .. }
            | Self::Pdf { .. }
            | Self::DocxArchive { .. }
            | Self::DocxXml { .. } => ErrorKind::ExtractionFailure,
            Self::Inference { .. } | Self::InferenceHttp { .. } => ErrorKind::InferenceFailure,
            Self::Config(_) | Self::Validation(_) | Self::Io(_) | Self::Serialization(_) => {
                ErrorKind::Other
            }
        }
    }

    pub(crate) fn inference(task: InferenceTask, message: impl Into<String>) -> Self {
        Self::Inference {
            task,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
