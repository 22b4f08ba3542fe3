use crate::utils::logger::{LogLevel, Logger};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
    active: Cell<bool>,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Spinner {
            bar,
            active: Cell::new(true),
        }
    }

    pub fn succeed(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            Logger::new().log_message(LogLevel::Success, &message.into());
            self.active.set(false);
        }
    }

    /// Clears the spinner without logging; the caller reports the error.
    pub fn fail(&self) {
        if self.active.get() {
            self.bar.finish_and_clear();
            self.active.set(false);
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.active.get() {
            self.bar.abandon();
            self.active.set(false);
        }
    }
}

/// Runs `action` behind a spinner and logs `on_success` once it returns `Ok`.
pub fn run_step<T, E, F, S>(start_message: &str, on_success: S, action: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    S: FnOnce(&T) -> String,
{
    let spinner = Spinner::new(start_message);
    match action() {
        Ok(value) => {
            let message = on_success(&value);
            spinner.succeed(message);
            Ok(value)
        }
        Err(err) => {
            spinner.fail();
            Err(err)
        }
    }
}
