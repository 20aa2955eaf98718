// file: src/inference/task.rs
// description: inference task kinds, default models and generation parameters
// reference: https://huggingface.co/docs/transformers/main_classes/pipelines

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SUMMARY_MAX_LENGTH: usize = 150;
pub const DEFAULT_SUMMARY_MIN_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceTask {
    EntityRecognition,
    KeywordExtraction,
    Summarization,
}

impl InferenceTask {
    pub const ALL: [InferenceTask; 3] = [
        InferenceTask::EntityRecognition,
        InferenceTask::KeywordExtraction,
        InferenceTask::Summarization,
    ];

    /// Pipeline task name the model is served under.
    pub fn pipeline_tag(&self) -> &'static str {
        match self {
            Self::EntityRecognition => "ner",
            Self::KeywordExtraction => "token-classification",
            Self::Summarization => "summarization",
        }
    }

    /// Model used when the configuration leaves the identifier unset.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::EntityRecognition => "dbmdz/bert-large-cased-finetuned-conll03-english",
            Self::KeywordExtraction => "yanekyuk/bert-uncased-keyword-extractor",
            Self::Summarization => "sshleifer/distilbart-cnn-12-6",
        }
    }

    pub fn produces_spans(&self) -> bool {
        !matches!(self, Self::Summarization)
    }
}

impl fmt::Display for InferenceTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pipeline_tag())
    }
}

/// Decoding settings for generative tasks. Sampling stays off so the same
/// input always yields the same summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_length: usize,
    pub min_length: usize,
    pub do_sample: bool,
}

impl GenerationParams {
    pub fn bounded(max_length: usize, min_length: usize) -> Self {
        Self {
            max_length,
            min_length,
            do_sample: false,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::bounded(DEFAULT_SUMMARY_MAX_LENGTH, DEFAULT_SUMMARY_MIN_LENGTH)
    }
}
