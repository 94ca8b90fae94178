//! Local character database, downloaded on first use.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::{Context, Result};
use fslock::LockFile;
use runas_ui::{HumanBytes, Spinner};

use crate::config::UcdConfig;
use crate::fetch::{self, FetchEvent, FetchHandle};

/// How often the spinner advances while a download runs.
pub const PROGRESS_TICK: Duration = Duration::from_millis(150);

/// Open the configured database, downloading it first if the file is missing.
pub fn open(config: &UcdConfig) -> Result<File> {
    log::debug!("character database: {}", config.path.display());
    if !config.path.exists() {
        eprintln!(
            "{} not found, downloading {}",
            config.path.display(),
            config.url
        );
        ensure_downloaded(config)?;
    }
    File::open(&config.path)
        .with_context(|| format!("Failed to open {}", config.path.display()))
}

/// Download the database unless it is already present.
///
/// Holds `<file>.lock` for the duration so concurrent first runs download
/// once. Returns `true` if this call performed the download.
pub fn ensure_downloaded(config: &UcdConfig) -> Result<bool> {
    let path = &config.path;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let lock_path = lock_path(path);
    let mut lock = LockFile::open(&lock_path)
        .with_context(|| format!("Failed to open lock file {}", lock_path.display()))?;
    if !lock.try_lock()? {
        log::debug!("waiting for {}", lock_path.display());
        lock.lock()
            .with_context(|| format!("Failed to lock {}", lock_path.display()))?;
    }

    if path.exists() {
        log::info!("{} was downloaded by another process", path.display());
        return Ok(false);
    }

    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    wait_with_progress(fetch::spawn(&config.url, path), &label)
        .with_context(|| format!("Failed to download {} from {}", path.display(), config.url))?;
    Ok(true)
}

/// Animate a spinner until the download finishes, then join the worker.
pub fn wait_with_progress(handle: FetchHandle, label: &str) -> Result<u64> {
    let spinner = Spinner::builder(format!("Downloading {label}")).start();
    loop {
        match handle.events().recv_timeout(PROGRESS_TICK) {
            Ok(FetchEvent::Progress { downloaded, total }) => {
                spinner.set_message(progress_message(label, downloaded, total));
            }
            Ok(FetchEvent::Finished) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        spinner.tick();
    }

    match handle.join() {
        Ok(bytes) => {
            spinner.success(format!("Downloaded {label} ({})", HumanBytes(bytes)));
            Ok(bytes)
        }
        Err(e) => {
            spinner.error(format!("Failed to download {label}"));
            Err(e.into())
        }
    }
}

fn progress_message(label: &str, downloaded: u64, total: Option<u64>) -> String {
    match total {
        Some(total) if total > 0 => format!(
            "Downloading {label}... {}% ({})",
            downloaded.saturating_mul(100) / total,
            HumanBytes(downloaded)
        ),
        _ => format!("Downloading {label}... {}", HumanBytes(downloaded)),
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("UnicodeData.txt"));
    name.push(".lock");
    path.with_file_name(name)
}
