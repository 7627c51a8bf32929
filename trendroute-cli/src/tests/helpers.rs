//! Test helpers for staging request files and capturing CLI output.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use trendroute_core::SuggestRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Temporary directory with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_request(&self, name: &str, request: &SuggestRequest) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_string_pretty(request).expect("serialise request");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

/// Parse `argv` and run it, returning the outcome and captured stdout.
pub(super) fn run_argv(argv: &[&str]) -> (Result<(), CliError>, String) {
    let sink = LoggingSink::with_clock(fixed_clock);
    let mut buffer = Vec::new();
    let outcome = Cli::try_parse_from(argv.iter().copied())
        .map_err(CliError::from)
        .and_then(|cli| run_command(cli.command, &sink, &mut buffer));
    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    (outcome, stdout)
}
