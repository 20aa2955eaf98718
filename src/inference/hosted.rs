// file: src/inference/hosted.rs
// description: hosted inference API client implementing the provider interface
// reference: https://huggingface.co/docs/inference-providers/providers/hf-inference

use crate::config::InferenceConfig;
use crate::error::{AnalyzerError, Result};
use crate::inference::{
    GenerationParams, InferenceHandle, InferenceOutput, InferenceProvider, InferenceTask,
};
use crate::models::TokenSpan;
use crate::utils::Validator;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a GenerationParams>,
}

#[derive(Debug, Deserialize)]
struct SummaryRecord {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// Creates handles bound to models served at `{base_url}/{model}`.
#[derive(Debug, Clone)]
pub struct HostedInferenceProvider {
    base_url: String,
    api_token: Option<String>,
    timeout: Duration,
    wait_for_model: bool,
}

impl HostedInferenceProvider {
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone().filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(config.timeout_secs),
            wait_for_model: config.wait_for_model,
        }
    }

    pub fn endpoint_for(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }
}

impl InferenceProvider for HostedInferenceProvider {
    fn create(
        &self,
        task: InferenceTask,
        model: Option<&str>,
    ) -> Result<Box<dyn InferenceHandle>> {
        let model = model.unwrap_or(task.default_model());
        Validator::validate_model_id(model)
            .map_err(|e| AnalyzerError::inference(task, e.to_string()))?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|source| AnalyzerError::InferenceHttp { task, source })?;

        if self.api_token.is_none() {
            debug!("No API token configured, {} requests are anonymous", task);
        }

        Ok(Box::new(HostedModel {
            task,
            model_id: model.to_string(),
            endpoint: self.endpoint_for(model),
            api_token: self.api_token.clone(),
            wait_for_model: self.wait_for_model,
            client,
        }))
    }
}

pub struct HostedModel {
    task: InferenceTask,
    model_id: String,
    endpoint: String,
    api_token: Option<String>,
    wait_for_model: bool,
    client: Client,
}

impl HostedModel {
    fn describe_request(&self, text: &str) -> String {
        format!(
            "Requesting {} from {} for {} chars",
            self.task,
            self.model_id,
            text.chars().count()
        )
    }
}

impl InferenceHandle for HostedModel {
    fn task(&self) -> InferenceTask {
        self.task
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn invoke(&self, text: &str, params: Option<&GenerationParams>) -> Result<InferenceOutput> {
        let task = self.task;
        let request = InferenceRequest {
            inputs: text,
            parameters: params,
        };

        debug!("{}", self.describe_request(text));

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        if self.wait_for_model {
            builder = builder.header("x-wait-for-model", "true");
        }

        let response = builder
            .send()
            .map_err(|source| AnalyzerError::InferenceHttp { task, source })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|source| AnalyzerError::InferenceHttp { task, source })?;

        if !status.is_success() {
            return Err(AnalyzerError::inference(
                task,
                format!(
                    "{} request failed with status {}: {}",
                    self.model_id,
                    status,
                    api_error_message(&body)
                ),
            ));
        }

        parse_response(task, &body)
    }
}

pub(crate) fn parse_response(task: InferenceTask, body: &str) -> Result<InferenceOutput> {
    let malformed = |e: serde_json::Error| {
        AnalyzerError::inference(task, format!("Failed to parse {} response: {}", task, e))
    };

    if task.produces_spans() {
        let spans: Vec<TokenSpan> = serde_json::from_str(body).map_err(malformed)?;
        Ok(InferenceOutput::Spans(spans))
    } else {
        let records: Vec<SummaryRecord> = serde_json::from_str(body).map_err(malformed)?;
        Ok(InferenceOutput::Summaries(
            records.into_iter().map(|r| r.summary_text).collect(),
        ))
    }
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => api_error.error,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
