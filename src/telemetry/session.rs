//! File-sentinel crash detection
//!
//! A marker file is written when a session begins and removed when it ends
//! cleanly. A marker left over at the next startup means the previous
//! session crashed; its contents become the crash report.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{CrashReport, CrashReporter};

/// Default directory for the session marker, relative to the working dir
pub const DEFAULT_SESSION_DIR: &str = ".inflation_calculator";

const MARKER_FILE: &str = "session.json";

/// File-backed [`CrashReporter`]
///
/// The leftover marker (if any) is captured once at [`SessionSentinel::begin`];
/// the trait queries read that snapshot and never touch the disk again.
#[derive(Debug)]
pub struct SessionSentinel {
    marker_path: PathBuf,
    previous: Option<CrashReport>,
}

impl SessionSentinel {
    /// Start a session in the default marker directory
    pub fn begin_default() -> io::Result<Self> {
        Self::begin(DEFAULT_SESSION_DIR)
    }

    /// Start a session, capturing any crash left by the previous one
    pub fn begin<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let marker_path = dir.join(MARKER_FILE);

        let previous = match fs::read_to_string(&marker_path) {
            Ok(contents) => match serde_json::from_str::<CrashReport>(&contents) {
                Ok(report) => Some(report),
                Err(err) => {
                    // Unreadable marker still proves an unclean shutdown
                    log::warn!("session marker was corrupt: {}", err);
                    Some(CrashReport {
                        started_at: Utc::now(),
                        app_version: String::new(),
                    })
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err),
        };

        let marker = CrashReport {
            started_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        };
        fs::write(&marker_path, serde_json::to_string(&marker)?)?;

        Ok(Self {
            marker_path,
            previous,
        })
    }

    /// Mark the session as cleanly finished
    pub fn finish(&self) {
        if let Err(err) = fs::remove_file(&self.marker_path) {
            // Telemetry must never take the calculator down
            log::warn!("could not clear session marker: {}", err);
        }
    }
}

impl CrashReporter for SessionSentinel {
    fn has_crashed_last_session(&self) -> bool {
        self.previous.is_some()
    }

    fn last_session_report(&self) -> Option<CrashReport> {
        self.previous.clone()
    }
}
