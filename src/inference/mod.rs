// file: src/inference/mod.rs
// description: model access layer, provider interfaces and the hosted provider
// reference: internal module structure

pub mod accessor;
pub mod hosted;
pub mod provider;
#[cfg(test)]
pub(crate) mod stub;
pub mod task;

pub use accessor::ModelAccessor;
pub use hosted::{HostedInferenceProvider, HostedModel};
pub use provider::{InferenceHandle, InferenceOutput, InferenceProvider};
pub use task::{
    DEFAULT_SUMMARY_MAX_LENGTH, DEFAULT_SUMMARY_MIN_LENGTH, GenerationParams, InferenceTask,
};
