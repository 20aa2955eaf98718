// file: src/pipeline/progress.rs
// description: per-stage spinners and timing for a single document analysis
// reference: uses indicatif for spinners and tracks stage durations

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    pub stages: Vec<(String, Duration)>,
}

impl AnalysisStats {
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, d)| *d).sum()
    }

    pub fn slowest(&self) -> Option<&(String, Duration)> {
        self.stages.iter().max_by_key(|(_, d)| *d)
    }
}

pub struct ProgressTracker {
    visible: bool,
    colored: bool,
    stats: Mutex<AnalysisStats>,
}

impl ProgressTracker {
    pub fn new(visible: bool, colored: bool) -> Self {
        Self {
            visible,
            colored,
            stats: Mutex::new(AnalysisStats::default()),
        }
    }

    pub fn hidden() -> Self {
        Self::new(false, false)
    }

    pub fn stage(&self, name: &str) -> StageSpinner<'_> {
        let bar = if self.visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(spinner_style(self.colored));
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(name.to_string());

        StageSpinner {
            tracker: self,
            bar,
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    pub fn get_stats(&self) -> AnalysisStats {
        self.stats
            .lock()
            .map(|stats| stats.clone())
            .unwrap_or_default()
    }

    fn record(&self, name: String, elapsed: Duration) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.stages.push((name, elapsed));
        }
    }
}

pub struct StageSpinner<'a> {
    tracker: &'a ProgressTracker,
    bar: ProgressBar,
    name: String,
    start: Instant,
}

impl StageSpinner<'_> {
    pub fn finish(self, detail: &str) -> Duration {
        let elapsed = self.start.elapsed();
        let line = format!("{} ({}, {:.1}s)", self.name, detail, elapsed.as_secs_f64());
        let line = if self.tracker.colored {
            format!("{} {}", "✓".green().bold(), line)
        } else {
            format!("✓ {}", line)
        };
        self.bar.finish_and_clear();
        if self.tracker.visible {
            self.bar.println(line);
        }
        self.tracker.record(self.name, elapsed);
        elapsed
    }

    pub fn fail(self) {
        self.bar.abandon_with_message(format!("{} failed", self.name));
    }
}

fn spinner_style(colored: bool) -> ProgressStyle {
    let template = if colored {
        "{spinner:.green} {msg} [{elapsed}]"
    } else {
        "{spinner} {msg} [{elapsed}]"
    };
    ProgressStyle::default_spinner()
        .template(template)
        .expect("Failed to create spinner template")
}
