//! Progress indicator shown while a request is pending.
//!
//! The spinner always draws to STDERR so stdout stays reserved for command
//! output, and it is cleared when dropped, whichever way the caller exits.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Indefinite spinner; a no-op when disabled.
pub struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// Start a spinner with `label`. `enabled` should be `!quiet`.
    pub fn start(enabled: bool, label: impl Into<String>) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(label.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Clear the spinner line.
    pub fn stop(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `fut` with a spinner that is cleared before the result is returned.
pub async fn with_spinner<F, T>(enabled: bool, label: impl Into<String>, fut: F) -> T
where
    F: Future<Output = T>,
{
    let mut spinner = Spinner::start(enabled, label);
    let result = fut.await;
    spinner.stop();
    result
}
