use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use kinetix::workflows::progress::{Progress, ProgressCallback};
use std::fmt::Write;
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} T ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("##-")
}

/// Renders scan progress on stderr. Clones share the same bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Tracks state without drawing, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        pb.finish_and_clear();
        Self { pb }
    }

    fn apply(pb: &ProgressBar, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_length(0);
                pb.set_style(spinner_style());
                pb.set_message(name);
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                pb.disable_steady_tick();
                pb.reset();
                pb.set_length(total_steps);
                pb.set_style(bar_style());
            }
            Progress::TaskIncrement => pb.inc(1),
            Progress::TaskFinish => {
                if let Some(length) = pb.length() {
                    pb.set_position(length);
                }
                pb.finish();
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message("✓ Done");
            }
            Progress::Message(msg) if pb.is_finished() => pb.set_message(msg),
            Progress::Message(msg) => pb.println(format!("  {msg}")),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();
        Box::new(move |event| Self::apply(&pb, event))
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
