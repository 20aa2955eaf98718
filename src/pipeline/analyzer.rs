// file: src/pipeline/analyzer.rs
// description: extracts a document's text and runs entity, keyword and summary inference
// reference: extract, analyze and summarize a single document

use crate::config::{AnalysisConfig, Config};
use crate::error::Result;
use crate::extractor::TextExtractor;
use crate::inference::{HostedInferenceProvider, ModelAccessor};
use crate::models::{AnalysisReport, Document, EntityMap};
use crate::pipeline::ProgressTracker;
use crate::utils::Validator;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DocumentAnalyzer {
    extractor: TextExtractor,
    models: ModelAccessor,
    settings: AnalysisConfig,
    progress: ProgressTracker,
}

impl DocumentAnalyzer {
    pub fn new(models: ModelAccessor, settings: AnalysisConfig) -> Self {
        Self {
            extractor: TextExtractor::new(),
            models,
            settings,
            progress: ProgressTracker::hidden(),
        }
    }

    /// Analyzer backed by the hosted inference API described in `config`.
    pub fn from_config(config: &Config) -> Self {
        let provider = Arc::new(HostedInferenceProvider::new(&config.inference));
        let models = ModelAccessor::new(provider, config.models.clone());
        Self::new(models, config.analysis.clone())
    }

    pub fn with_progress(mut self, progress: ProgressTracker) -> Self {
        self.progress = progress;
        self
    }

    pub fn models(&self) -> &ModelAccessor {
        &self.models
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn extract(&self, path: &Path) -> Result<(Document, String)> {
        let document = Document::from_path(path)?;
        let text = self.stage(
            "Extracting text",
            || self.extractor.extract(&document),
            |text| format!("{} characters", text.chars().count()),
        )?;
        Ok((document, text))
    }

    /// Named entities and keywords for the full text.
    pub fn analyze_text(&self, text: &str) -> Result<(EntityMap, Vec<String>)> {
        let entities = self.stage(
            "Recognizing entities",
            || self.models.get_entities(text),
            |entities| format!("{} found", entities.len()),
        )?;
        let keywords = self.stage(
            "Extracting keywords",
            || self.models.get_keywords(text),
            |keywords| format!("{} found", keywords.len()),
        )?;
        Ok((entities, keywords))
    }

    /// Summary of the leading `summary_input_chars` characters only.
    pub fn summarize_text(&self, text: &str) -> Result<String> {
        let input = Validator::truncate_chars(text, self.settings.summary_input_chars);
        if input.len() < text.len() {
            info!(
                "Summarizing the first {} characters of the document",
                self.settings.summary_input_chars
            );
        }

        self.stage(
            "Summarizing",
            || {
                self.models.get_summary(
                    input,
                    self.settings.summary_max_length,
                    self.settings.summary_min_length,
                )
            },
            |summary| format!("{} characters", summary.chars().count()),
        )
    }

    /// Returns `None` when the document yields no text to analyze. Text made
    /// only of whitespace counts as no text, and no model is loaded for it.
    pub fn analyze_file(&self, path: &Path) -> Result<Option<AnalysisReport>> {
        let (document, text) = self.extract(path)?;

        if Validator::is_blank(&text) {
            warn!("No text extracted from {}", document.display_name());
            return Ok(None);
        }

        let (entities, keywords) = self.analyze_text(&text)?;
        let summary = self.summarize_text(&text)?;

        Ok(Some(AnalysisReport::new(
            &document, &text, summary, entities, keywords,
        )))
    }

    fn stage<T>(
        &self,
        name: &str,
        run: impl FnOnce() -> Result<T>,
        detail: impl FnOnce(&T) -> String,
    ) -> Result<T> {
        let spinner = self.progress.stage(name);
        match run() {
            Ok(value) => {
                spinner.finish(&detail(&value));
                Ok(value)
            }
            Err(e) => {
                spinner.fail();
                Err(e)
            }
        }
    }
}
