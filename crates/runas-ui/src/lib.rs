//! # runas-ui
//!
//! Terminal feedback for the `runas` tools: a spinner for long-running work
//! and a small palette for status lines.
//!
//! ## Example
//!
//! ```rust,no_run
//! use runas_ui::Spinner;
//!
//! let spinner = Spinner::builder("Downloading UnicodeData.txt").start();
//! // ... do work, calling spinner.tick() periodically ...
//! spinner.success("Downloaded UnicodeData.txt");
//! ```

mod spinner;
mod style;

pub use spinner::{Spinner, SpinnerBuilder};
pub use style::{Style, icons};

// Re-export commonly used items from dependencies
pub use indicatif::HumanBytes;
