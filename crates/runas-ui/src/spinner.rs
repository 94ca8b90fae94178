use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::style::Style;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Builder for [`Spinner`].
pub struct SpinnerBuilder {
    message: Cow<'static, str>,
    hidden: bool,
}

impl SpinnerBuilder {
    fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            hidden: false,
        }
    }

    /// Never draw anything. Status lines from `success`/`error` are still printed.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn start(self) -> Spinner {
        let target = if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(TICK_CHARS);
        bar.set_style(style);
        bar.set_message(self.message);
        Spinner { bar }
    }
}

/// A single-line spinner on stderr. Drawing is skipped when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn builder(message: impl Into<Cow<'static, str>>) -> SpinnerBuilder {
        SpinnerBuilder::new(message)
    }

    pub fn set_message(&self, message: impl Into<Cow<'static, str>>) {
        self.bar.set_message(message);
    }

    /// Advance the animation by one frame.
    pub fn tick(&self) {
        self.bar.tick();
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Remove the spinner line without printing anything.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    pub fn success(self, message: impl AsRef<str>) {
        self.finish_with(Style::Success, message.as_ref());
    }

    pub fn error(self, message: impl AsRef<str>) {
        self.finish_with(Style::Error, message.as_ref());
    }

    fn finish_with(self, style: Style, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{}", style.status_line(message));
    }
}
