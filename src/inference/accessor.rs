// file: src/inference/accessor.rs
// description: lazily created, per-task model handles with one method per task
// reference: ensure-connected pattern for optional clients

use crate::config::ModelsConfig;
use crate::error::{AnalyzerError, Result};
use crate::inference::{GenerationParams, InferenceHandle, InferenceProvider, InferenceTask};
use crate::models::EntityMap;
use crate::utils::{OperationTimer, Validator};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

type HandleSlot = Mutex<Option<Arc<dyn InferenceHandle>>>;

/// Holds the entity recognizer, keyword extractor and summarizer handles.
///
/// Nothing is created at construction. Each handle is created by the
/// provider the first time its method is called and reused afterwards; the
/// three slots are independent of one another. Results are never cached.
pub struct ModelAccessor {
    provider: Arc<dyn InferenceProvider>,
    models: ModelsConfig,
    ner: HandleSlot,
    keyword_extractor: HandleSlot,
    summarizer: HandleSlot,
}

impl ModelAccessor {
    pub fn new(provider: Arc<dyn InferenceProvider>, models: ModelsConfig) -> Self {
        Self {
            provider,
            models,
            ner: Mutex::new(None),
            keyword_extractor: Mutex::new(None),
            summarizer: Mutex::new(None),
        }
    }

    pub fn get_entities(&self, text: &str) -> Result<EntityMap> {
        let task = InferenceTask::EntityRecognition;
        let handle = self.handle(task)?;

        let timer = OperationTimer::start(task, handle.model_id());
        let spans = handle.invoke(text, None)?.into_spans(task)?;
        let entities = EntityMap::from_spans(spans);
        timer.finish(entities.len());

        Ok(entities)
    }

    pub fn get_keywords(&self, text: &str) -> Result<Vec<String>> {
        let task = InferenceTask::KeywordExtraction;
        let handle = self.handle(task)?;

        let timer = OperationTimer::start(task, handle.model_id());
        let keywords: Vec<String> = handle
            .invoke(text, None)?
            .into_spans(task)?
            .into_iter()
            .map(|span| span.word)
            .collect();
        timer.finish(keywords.len());

        Ok(keywords)
    }

    /// Summarize with deterministic decoding. Lengths are in model tokens.
    pub fn get_summary(&self, text: &str, max_length: usize, min_length: usize) -> Result<String> {
        Validator::validate_summary_bounds(max_length, min_length)?;

        let task = InferenceTask::Summarization;
        let handle = self.handle(task)?;
        let params = GenerationParams::bounded(max_length, min_length);

        let timer = OperationTimer::start(task, handle.model_id());
        let summary = handle
            .invoke(text, Some(&params))?
            .into_summaries(task)?
            .into_iter()
            .next()
            .ok_or_else(|| AnalyzerError::inference(task, "model returned no summary"))?;
        timer.finish(1);

        Ok(summary)
    }

    /// Summary with the default bounds of 150 and 50 tokens.
    pub fn get_default_summary(&self, text: &str) -> Result<String> {
        let params = GenerationParams::default();
        self.get_summary(text, params.max_length, params.min_length)
    }

    pub fn is_loaded(&self, task: InferenceTask) -> bool {
        self.slot(task)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn slot(&self, task: InferenceTask) -> &HandleSlot {
        match task {
            InferenceTask::EntityRecognition => &self.ner,
            InferenceTask::KeywordExtraction => &self.keyword_extractor,
            InferenceTask::Summarization => &self.summarizer,
        }
    }

    /// The slot lock is held while the provider creates the handle, so
    /// concurrent first calls still create it once.
    fn handle(&self, task: InferenceTask) -> Result<Arc<dyn InferenceHandle>> {
        let mut slot = self
            .slot(task)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(handle) = slot.as_ref() {
            debug!("Reusing {} handle ({})", task, handle.model_id());
            return Ok(Arc::clone(handle));
        }

        let model = self.models.model_for(task);
        info!(
            "Loading {} model: {}",
            task,
            model.unwrap_or(task.default_model())
        );

        let handle: Arc<dyn InferenceHandle> = Arc::from(self.provider.create(task, model)?);
        *slot = Some(Arc::clone(&handle));
        Ok(handle)
    }
}
