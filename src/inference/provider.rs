// file: src/inference/provider.rs
// description: injectable inference provider and handle interfaces
// reference: internal module structure

use crate::error::{AnalyzerError, Result};
use crate::inference::{GenerationParams, InferenceTask};
use crate::models::TokenSpan;

/// Structured result of one handle invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutput {
    /// Token-classification records, in model order.
    Spans(Vec<TokenSpan>),
    /// Generated summaries, best first.
    Summaries(Vec<String>),
}

impl InferenceOutput {
    pub fn into_spans(self, task: InferenceTask) -> Result<Vec<TokenSpan>> {
        match self {
            Self::Spans(spans) => Ok(spans),
            Self::Summaries(_) => Err(AnalyzerError::inference(
                task,
                "expected token spans, model returned summaries",
            )),
        }
    }

    pub fn into_summaries(self, task: InferenceTask) -> Result<Vec<String>> {
        match self {
            Self::Summaries(summaries) => Ok(summaries),
            Self::Spans(_) => Err(AnalyzerError::inference(
                task,
                "expected summaries, model returned token spans",
            )),
        }
    }
}

/// A model bound to one task, ready to be invoked on text.
pub trait InferenceHandle: Send + Sync {
    fn task(&self) -> InferenceTask;

    fn model_id(&self) -> &str;

    fn invoke(&self, text: &str, params: Option<&GenerationParams>) -> Result<InferenceOutput>;
}

/// Creates task handles. `model` of `None` selects the task's default model.
pub trait InferenceProvider: Send + Sync {
    fn create(&self, task: InferenceTask, model: Option<&str>)
    -> Result<Box<dyn InferenceHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_output_conversions() {
        let spans = InferenceOutput::Spans(vec![TokenSpan::new("fox", "KEY")]);
        assert_eq!(
            spans
                .into_spans(InferenceTask::KeywordExtraction)
                .unwrap()
                .len(),
            1
        );

        let summaries = InferenceOutput::Summaries(vec!["short".to_string()]);
        assert_eq!(
            summaries
                .into_summaries(InferenceTask::Summarization)
                .unwrap(),
            vec!["short".to_string()]
        );
    }

    #[test]
    fn test_output_mismatch_is_inference_failure() {
        let err = InferenceOutput::Summaries(vec![])
            .into_spans(InferenceTask::EntityRecognition)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InferenceFailure);

        let err = InferenceOutput::Spans(vec![])
            .into_summaries(InferenceTask::Summarization)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InferenceFailure);
    }
}
