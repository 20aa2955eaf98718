// file: src/inference/stub.rs
// description: deterministic in-process provider that counts handle creation
// reference: test doubles for the inference provider

use crate::error::{AnalyzerError, Result};
use crate::inference::{
    GenerationParams, InferenceHandle, InferenceOutput, InferenceProvider, InferenceTask,
};
use crate::models::TokenSpan;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct TaskState {
    create_attempts: usize,
    created: usize,
    invocations: usize,
    requested_model: Option<Option<String>>,
    last_input: Option<String>,
    last_params: Option<GenerationParams>,
}

#[derive(Default)]
struct Behaviour {
    spans: HashMap<InferenceTask, Vec<TokenSpan>>,
    create_failures: HashMap<InferenceTask, String>,
    invoke_failures: HashMap<InferenceTask, String>,
}

/// Provider whose handles answer from simple text rules:
/// - entities: capitalized words that do not start a sentence, labelled `MISC`;
/// - keywords: alphabetic words of five or more letters, lowercased;
/// - summary: the first sentence, cut to `max_length` words.
///
/// Canned spans and failures can be configured per task.
#[derive(Default)]
pub struct StubProvider {
    state: Arc<Mutex<HashMap<InferenceTask, TaskState>>>,
    behaviour: Arc<Behaviour>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spans(mut self, task: InferenceTask, spans: Vec<TokenSpan>) -> Self {
        self.behaviour_mut().spans.insert(task, spans);
        self
    }

    pub fn failing_create(mut self, task: InferenceTask, message: &str) -> Self {
        self.behaviour_mut()
            .create_failures
            .insert(task, message.to_string());
        self
    }

    pub fn failing_invoke(mut self, task: InferenceTask, message: &str) -> Self {
        self.behaviour_mut()
            .invoke_failures
            .insert(task, message.to_string());
        self
    }

    fn behaviour_mut(&mut self) -> &mut Behaviour {
        Arc::get_mut(&mut self.behaviour).expect("stub configured before use")
    }

    fn read<T>(&self, task: InferenceTask, f: impl FnOnce(&TaskState) -> T) -> T {
        let state = self.state.lock().unwrap();
        let untouched = TaskState::default();
        f(state.get(&task).unwrap_or(&untouched))
    }

    pub fn created(&self, task: InferenceTask) -> usize {
        self.read(task, |s| s.created)
    }

    pub fn create_attempts(&self, task: InferenceTask) -> usize {
        self.read(task, |s| s.create_attempts)
    }

    pub fn invocations(&self, task: InferenceTask) -> usize {
        self.read(task, |s| s.invocations)
    }

    pub fn requested_model(&self, task: InferenceTask) -> Option<Option<String>> {
        self.read(task, |s| s.requested_model.clone())
    }

    pub fn last_input(&self, task: InferenceTask) -> Option<String> {
        self.read(task, |s| s.last_input.clone())
    }

    pub fn last_params(&self, task: InferenceTask) -> Option<GenerationParams> {
        self.read(task, |s| s.last_params)
    }
}

impl InferenceProvider for StubProvider {
    fn create(
        &self,
        task: InferenceTask,
        model: Option<&str>,
    ) -> Result<Box<dyn InferenceHandle>> {
        let mut state = self.state.lock().unwrap();
        let entry = state.entry(task).or_default();
        entry.create_attempts += 1;
        entry.requested_model = Some(model.map(str::to_string));

        if let Some(message) = self.behaviour.create_failures.get(&task) {
            return Err(AnalyzerError::inference(task, message.clone()));
        }

        entry.created += 1;
        Ok(Box::new(StubHandle {
            task,
            model_id: model.unwrap_or(task.default_model()).to_string(),
            state: Arc::clone(&self.state),
            behaviour: Arc::clone(&self.behaviour),
        }))
    }
}

struct StubHandle {
    task: InferenceTask,
    model_id: String,
    state: Arc<Mutex<HashMap<InferenceTask, TaskState>>>,
    behaviour: Arc<Behaviour>,
}

impl InferenceHandle for StubHandle {
    fn task(&self) -> InferenceTask {
        self.task
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn invoke(&self, text: &str, params: Option<&GenerationParams>) -> Result<InferenceOutput> {
        {
            let mut state = self.state.lock().unwrap();
            let entry = state.entry(self.task).or_default();
            entry.invocations += 1;
            entry.last_input = Some(text.to_string());
            entry.last_params = params.copied();
        }

        if let Some(message) = self.behaviour.invoke_failures.get(&self.task) {
            return Err(AnalyzerError::inference(self.task, message.clone()));
        }

        if let Some(spans) = self.behaviour.spans.get(&self.task) {
            return Ok(InferenceOutput::Spans(spans.clone()));
        }

        Ok(match self.task {
            InferenceTask::EntityRecognition => InferenceOutput::Spans(capitalized_words(text)),
            InferenceTask::KeywordExtraction => InferenceOutput::Spans(long_words(text)),
            InferenceTask::Summarization => {
                let max_words = params.map(|p| p.max_length).unwrap_or(usize::MAX);
                InferenceOutput::Summaries(vec![first_sentence(text, max_words)])
            }
        })
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

fn capitalized_words(text: &str) -> Vec<TokenSpan> {
    let mut spans = Vec::new();
    let mut sentence_start = true;
    for raw in text.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if !sentence_start && word.chars().next().is_some_and(char::is_uppercase) {
            spans.push(TokenSpan::new(word, "MISC"));
        }
        sentence_start = raw.ends_with(['.', '!', '?']);
    }
    spans
}

fn long_words(text: &str) -> Vec<TokenSpan> {
    words(text)
        .filter(|w| w.chars().count() >= 5 && w.chars().all(char::is_alphabetic))
        .map(|w| TokenSpan::new(w.to_lowercase(), "KEY"))
        .collect()
}

fn first_sentence(text: &str, max_words: usize) -> String {
    let trimmed = text.trim();
    let sentence = match trimmed.find(['.', '!', '?']) {
        Some(idx) => &trimmed[..=idx],
        None => trimmed,
    };
    sentence
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
