// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AnalyzerError, Result};
use crate::inference::{DEFAULT_SUMMARY_MAX_LENGTH, DEFAULT_SUMMARY_MIN_LENGTH, InferenceTask};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Model identifiers per task. Unset entries use the task default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelsConfig {
    pub ner: Option<String>,
    pub keywords: Option<String>,
    pub summarization: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub wait_for_model: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub summary_input_chars: usize,
    pub summary_max_length: usize,
    pub summary_min_length: usize,
    pub display_keywords: usize,
}

impl ModelsConfig {
    pub fn model_for(&self, task: InferenceTask) -> Option<&str> {
        match task {
            InferenceTask::EntityRecognition => self.ner.as_deref(),
            InferenceTask::KeywordExtraction => self.keywords.as_deref(),
            InferenceTask::Summarization => self.summarization.as_deref(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/hf-inference/models".to_string(),
            api_token: None,
            timeout_secs: 120,
            wait_for_model: true,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summary_input_chars: 1000,
            summary_max_length: DEFAULT_SUMMARY_MAX_LENGTH,
            summary_min_length: DEFAULT_SUMMARY_MIN_LENGTH,
            display_keywords: 20,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when it exists, then
    /// apply `DOC_ANALYZER__SECTION__KEY` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_ANALYZER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        if config.inference.api_token.is_none() {
            config.inference.api_token = std::env::var("HF_TOKEN").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.inference.timeout_secs == 0 {
            return Err(AnalyzerError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.analysis.summary_input_chars == 0 {
            return Err(AnalyzerError::Config(
                "summary_input_chars must be greater than 0".to_string(),
            ));
        }

        if self.analysis.summary_min_length > self.analysis.summary_max_length {
            return Err(AnalyzerError::Config(format!(
                "summary_min_length ({}) exceeds summary_max_length ({})",
                self.analysis.summary_min_length, self.analysis.summary_max_length
            )));
        }

        Validator::validate_url(&self.inference.base_url)
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        for task in InferenceTask::ALL {
            if let Some(model) = self.models.model_for(task) {
                Validator::validate_model_id(model)
                    .map_err(|e| AnalyzerError::Config(format!("[models] {}: {}", task, e)))?;
            }
        }

        Ok(())
    }
}
