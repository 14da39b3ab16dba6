//! Build-phase spinners; a no-op when the `progress` feature is disabled

use std::time::Duration;

#[cfg(feature = "progress")]
pub use indicatif::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
pub use self::noop::*;

const TICK: Duration = Duration::from_millis(80);

/// Start a spinner for one build phase, or `None` in quiet mode
pub fn phase_spinner(message: &'static str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(TICK);
    Some(spinner)
}

/// Finish a phase spinner with a final message
pub fn finish_phase(spinner: Option<ProgressBar>, message: String) {
    if let Some(spinner) = spinner {
        spinner.finish_with_message(message);
    }
}

#[cfg(not(feature = "progress"))]
mod noop {
    use std::borrow::Cow;
    use std::time::Duration;

    #[derive(Clone)]
    pub struct ProgressBar;

    impl ProgressBar {
        pub fn new_spinner() -> Self {
            ProgressBar
        }

        pub fn set_style(&self, _style: ProgressStyle) {}
        pub fn set_message(&self, _msg: impl Into<Cow<'static, str>>) {}
        pub fn enable_steady_tick(&self, _interval: Duration) {}
        pub fn finish_with_message(&self, _msg: impl Into<Cow<'static, str>>) {}
    }

    pub struct ProgressStyle;

    impl ProgressStyle {
        pub fn default_spinner() -> Self {
            ProgressStyle
        }

        pub fn template(self, _template: &str) -> Result<Self, std::convert::Infallible> {
            Ok(self)
        }
    }
}
