// file: src/utils/telemetry.rs
// description: timing of inference calls, reported as structured tracing events

use crate::inference::InferenceTask;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Calls slower than this are logged at warn level.
pub const SLOW_INFERENCE: Duration = Duration::from_secs(30);

/// Times one inference call against one model.
pub struct OperationTimer {
    task: InferenceTask,
    model: String,
    start: Instant,
}

impl OperationTimer {
    pub fn start(task: InferenceTask, model: &str) -> Self {
        debug!(task = %task, model, "inference started");
        Self {
            task,
            model: model.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Ends the timing; `items` is the number of spans or summaries produced.
    pub fn finish(self, items: usize) -> Duration {
        let elapsed = self.elapsed();
        let elapsed_ms = elapsed.as_millis() as u64;

        if elapsed > SLOW_INFERENCE {
            warn!(
                task = %self.task,
                model = %self.model,
                elapsed_ms,
                "slow inference call"
            );
        } else {
            debug!(
                task = %self.task,
                model = %self.model,
                items,
                elapsed_ms,
                "inference finished"
            );
        }
        elapsed
    }
}
