use std::path::PathBuf;

use anyhow::{Context, Result};

/// Canonical location of the latest `UnicodeData.txt`.
pub const DEFAULT_UCD_URL: &str = "https://www.unicode.org/Public/UNIDATA/UnicodeData.txt";

/// File name used under the home directory when `UCD_PATH` is not set.
pub const DEFAULT_UCD_FILE_NAME: &str = "UnicodeData.txt";

/// Overrides the local database path.
pub const UCD_PATH_ENV: &str = "UCD_PATH";

/// Overrides the download source.
pub const UCD_URL_ENV: &str = "UCD_URL";

/// Where the database lives locally and where to fetch it from when it doesn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UcdConfig {
    pub path: PathBuf,
    pub url: String,
}

impl UcdConfig {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }

    /// Resolve from `UCD_PATH` / `UCD_URL`, falling back to `~/UnicodeData.txt`
    /// and the unicode.org URL.
    pub fn from_env() -> Result<Self> {
        let path = match non_empty_var(UCD_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => default_ucd_path()?,
        };
        let url = non_empty_var(UCD_URL_ENV).unwrap_or_else(|| DEFAULT_UCD_URL.to_string());
        Ok(Self { path, url })
    }
}

/// `<home>/UnicodeData.txt`
pub fn default_ucd_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DEFAULT_UCD_FILE_NAME))
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
