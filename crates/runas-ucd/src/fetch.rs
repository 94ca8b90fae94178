//! Background download of the character database.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use atomicwrites::{AtomicFile, OverwriteBehavior};
use reqwest::blocking::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("download cancelled")]
    Cancelled,
    #[error("download worker panicked")]
    WorkerPanicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchEvent {
    /// Bytes received so far, and the body length if the server sent one.
    Progress { downloaded: u64, total: Option<u64> },
    /// Sent once when the worker stops, whether or not it succeeded.
    Finished,
}

/// A download running on its own thread.
pub struct FetchHandle {
    events: Receiver<FetchEvent>,
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<Result<u64, FetchError>>,
}

impl FetchHandle {
    pub fn events(&self) -> &Receiver<FetchEvent> {
        &self.events
    }

    /// Ask the worker to stop. It notices between body chunks and fails with
    /// [`FetchError::Cancelled`].
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Wait for the worker and return the number of bytes written.
    pub fn join(self) -> Result<u64, FetchError> {
        self.worker.join().unwrap_or(Err(FetchError::WorkerPanicked))
    }
}

/// Start downloading `url` into `dest` on a background thread.
pub fn spawn(url: &str, dest: &Path) -> FetchHandle {
    let (tx, events) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));

    let url = url.to_string();
    let dest = dest.to_path_buf();
    let worker_cancel = Arc::clone(&cancel);
    let worker = thread::spawn(move || {
        let on_progress = |downloaded, total| {
            let _ = tx.send(FetchEvent::Progress { downloaded, total });
        };
        let result = download(&url, &dest, &worker_cancel, &on_progress);
        let _ = tx.send(FetchEvent::Finished);
        result
    });

    FetchHandle {
        events,
        cancel,
        worker,
    }
}

/// Download `url` into `dest`, replacing it atomically once the whole body
/// has been received.
pub fn download(
    url: &str,
    dest: &Path,
    cancel: &AtomicBool,
    on_progress: &dyn Fn(u64, Option<u64>),
) -> Result<u64, FetchError> {
    let write_err = |source| FetchError::Write {
        path: dest.to_path_buf(),
        source,
    };
    let dest = std::path::absolute(dest).map_err(write_err)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    log::info!("downloading {url} to {}", dest.display());
    let response = http_client()?
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let total = response.content_length();
    let mut reader = ProgressReader::new(response, total, cancel, on_progress);
    let written = AtomicFile::new(&dest, OverwriteBehavior::AllowOverwrite)
        .write(|file| io::copy(&mut reader, file))
        .map_err(|err| {
            if cancel.load(Ordering::Relaxed) {
                return FetchError::Cancelled;
            }
            write_err(match err {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
            })
        })?;

    log::info!("downloaded {written} bytes to {}", dest.display());
    Ok(written)
}

/// Plain client: no custom headers, no timeout.
fn http_client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(None)
        .build()
        .map_err(FetchError::Client)
}

/// A reader wrapper that reports download progress and honours cancellation
struct ProgressReader<'a, R> {
    inner: R,
    downloaded: u64,
    total: Option<u64>,
    cancel: &'a AtomicBool,
    on_progress: &'a dyn Fn(u64, Option<u64>),
}

impl<'a, R> ProgressReader<'a, R> {
    fn new(
        inner: R,
        total: Option<u64>,
        cancel: &'a AtomicBool,
        on_progress: &'a dyn Fn(u64, Option<u64>),
    ) -> Self {
        Self {
            inner,
            downloaded: 0,
            total,
            cancel,
            on_progress,
        }
    }
}

impl<R: Read> Read for ProgressReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(io::Error::other("download cancelled"));
        }
        let bytes_read = self.inner.read(buf)?;
        if bytes_read > 0 {
            self.downloaded += bytes_read as u64;
            (self.on_progress)(self.downloaded, self.total);
        }
        Ok(bytes_read)
    }
}
