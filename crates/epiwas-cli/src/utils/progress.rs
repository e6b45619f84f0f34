use epiwas::engine::progress::{Progress, ProgressCallback};
use epiwas::workflows::pie::PERMUTATION_PHASE;
use epiwas::workflows::piwas::SCORING_PHASE;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 100;

/// What one task step counts during `phase`.
pub fn step_unit(phase: &str) -> &'static str {
    match phase {
        PERMUTATION_PHASE => "positions tested",
        SCORING_PHASE => "samples scored",
        _ => "steps",
    }
}

struct PhaseDisplay {
    bar: ProgressBar,
    phase: &'static str,
}

impl PhaseDisplay {
    fn handle(&mut self, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                self.phase = name;
                self.bar.reset();
                self.bar.set_length(0);
                self.bar.set_style(spinner_style());
                self.bar.set_prefix(name);
                self.bar.set_message("");
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                self.bar.disable_steady_tick();
                self.bar.reset();
                self.bar.set_length(total_steps);
                self.bar.set_style(bar_style());
                self.bar.set_message(step_unit(self.phase));
            }
            Progress::TaskIncrement => self.bar.inc(1),
            Progress::TaskFinish => {
                if let Some(total) = self.bar.length() {
                    self.bar.set_position(total);
                }
            }
            Progress::PhaseFinish => {
                self.bar.disable_steady_tick();
                self.bar.set_style(summary_style());
                self.bar.finish_with_message(self.summary());
            }
            Progress::Message(msg) => self.bar.println(format!("  {msg}")),
        }
    }

    /// `✓ Permutation Testing (812/812 positions tested)`, or just the phase name when the
    /// phase ran no counted task.
    fn summary(&self) -> String {
        match self.bar.length() {
            Some(total) if total > 0 => format!(
                "✓ {} ({}/{} {})",
                self.phase,
                self.bar.position(),
                total,
                step_unit(self.phase)
            ),
            _ => format!("✓ {}", self.phase),
        }
    }
}

/// Renders workflow phases as a spinner, counted tasks as a bar, and leaves one summary line
/// per finished phase.
#[derive(Clone)]
pub struct CliProgressHandler {
    display: Arc<Mutex<PhaseDisplay>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Tracks progress without drawing, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        Self {
            display: Arc::new(Mutex::new(PhaseDisplay { bar, phase: "" })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let display = self.display.clone();
        Box::new(move |event: Progress| match display.lock() {
            Ok(mut display) => display.handle(event),
            Err(_) => warn!("Progress display lock was poisoned; dropping progress event."),
        })
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:<20} [{bar:40.cyan/blue}] {pos}/{len} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

fn summary_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_bar())
}
