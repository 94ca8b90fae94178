//! Look up Unicode characters by the words in their names.
//!
//! The data source is the Unicode Character Database file `UnicodeData.txt`.
//! [`provider::open`] yields it from disk (downloading on first use), and
//! [`list`] scans it for records whose name words include every query word.

pub mod config;
pub mod fetch;
mod list;
pub mod provider;
mod query;
mod record;

pub use config::UcdConfig;
pub use fetch::{FetchError, FetchEvent, FetchHandle};
pub use list::{format_row, list};
pub use query::{Query, contains, matches_all};
pub use record::{Record, tokenize};
