use chlsite::core::models::site::Prediction;
use chlsite::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Running count of verdicts for the sites classified so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCounts {
    pub cofactor: usize,
    pub not_cofactor: usize,
    pub ambiguous: usize,
}

impl VerdictCounts {
    fn record(&mut self, prediction: Prediction) {
        match prediction {
            Prediction::Cofactor => self.cofactor += 1,
            Prediction::NotCofactor => self.not_cofactor += 1,
            Prediction::Ambiguous => self.ambiguous += 1,
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} cofactor, {} not-cofactor, {} ambiguous",
            self.cofactor, self.not_cofactor, self.ambiguous
        )
    }
}

struct ProgressState {
    pb: ProgressBar,
    verdicts: VerdictCounts,
}

/// Drives an indicatif bar from the prediction workflow's progress events.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<ProgressState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Tracks progress without drawing, for `-q` runs.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        pb.finish_and_clear();
        Self {
            state: Arc::new(Mutex::new(ProgressState {
                pb,
                verdicts: VerdictCounts::default(),
            })),
        }
    }

    /// Verdicts counted since the last `TaskStart`.
    pub fn verdicts(&self) -> VerdictCounts {
        self.state
            .lock()
            .map(|state| state.verdicts)
            .unwrap_or_default()
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = Arc::clone(&self.state);

        Box::new(move |progress: Progress| {
            let Ok(mut state) = state.lock() else {
                warn!("Progress state mutex was poisoned. Cannot update progress.");
                return;
            };
            let ProgressState { pb, verdicts } = &mut *state;

            match progress {
                Progress::PhaseStart { name } => {
                    pb.reset();
                    pb.set_length(0);
                    pb.set_style(spinner_style());
                    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb.set_message(name);
                }
                Progress::TaskStart { total_steps } => {
                    *verdicts = VerdictCounts::default();
                    pb.disable_steady_tick();
                    pb.reset();
                    pb.set_length(total_steps);
                    pb.set_style(bar_style());
                    pb.set_message(verdicts.summary());
                }
                Progress::SiteFinished {
                    cofactor,
                    chain_id,
                    residue_number,
                    prediction,
                } => {
                    verdicts.record(prediction);
                    pb.set_prefix(format!("{cofactor} {chain_id}{residue_number}"));
                    pb.set_message(verdicts.summary());
                    pb.inc(1);
                }
                Progress::TaskFinish => {
                    if let Some(length) = pb.length() {
                        pb.set_position(length);
                    }
                    pb.finish_with_message(verdicts.summary());
                }
                Progress::PhaseFinish => {
                    pb.disable_steady_tick();
                    if pb.length().unwrap_or(0) == 0 {
                        pb.finish_with_message("✓ Done");
                    }
                }
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:>10} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}
