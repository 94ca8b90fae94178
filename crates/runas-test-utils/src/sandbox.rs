//! Hermetic environment for running the `runas` binary in tests.
//!
//! - Private home directory under an `assert_fs::TempDir`
//! - `UCD_PATH` points into the sandbox, `UCD_URL` at a test server or at an
//!   unreachable address, so nothing touches the real network
//! - Proxy and logging variables from the outer environment are removed
//!
//! Everything is cleaned up on drop.
//!
//! ```no_run
//! use runas_test_utils::sandbox::Sandbox;
//!
//! let mut sb = Sandbox::new();
//! sb.write_ucd("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n");
//! sb.cmd("runas").arg("latin").assert().success();
//! ```

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::PathChild;
use std::fs;
use std::path::{Path, PathBuf};

use crate::UNREACHABLE_URL;

const SCRUBBED_VARS: &[&str] = &[
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

pub struct Sandbox {
    root: TempDir,
    pub home: PathBuf,
    pub ucd_path: PathBuf,
    ucd_url: String,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// Create a new sandbox; the database path starts out missing.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create sandbox TempDir");
        let home = root.child("home").to_path_buf();
        fs::create_dir_all(&home).expect("create home dir");
        let ucd_path = root.child("ucd").child("UnicodeData.txt").to_path_buf();

        Self {
            root,
            home,
            ucd_path,
            ucd_url: UNREACHABLE_URL.to_string(),
        }
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write the local database file.
    pub fn write_ucd<S: AsRef<[u8]>>(&mut self, contents: S) -> &mut Self {
        if let Some(parent) = self.ucd_path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&self.ucd_path, contents).expect("write ucd file");
        self
    }

    /// Point downloads at `url`.
    pub fn set_ucd_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.ucd_url = url.into();
        self
    }

    /// A cargo binary of this workspace, pre-wired with the sandbox environment.
    pub fn cmd(&self, program: &str) -> Command {
        let mut cmd = Command::cargo_bin(program).expect("locate cargo binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.root_path())
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("UCD_PATH", &self.ucd_path)
            .env("UCD_URL", &self.ucd_url)
            .env("NO_COLOR", "1");
        cmd
    }
}
