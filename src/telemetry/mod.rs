//! Telemetry seams for the surrounding application
//!
//! The calculator core stays pure; crash detection and analytics are
//! expressed as two narrow capabilities the application wires in. Vendors
//! come and go behind these traits without touching the engine.

mod session;
mod tracker;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use session::{SessionSentinel, DEFAULT_SESSION_DIR};
pub use tracker::LogEventTracker;

/// What is known about a session that did not end cleanly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashReport {
    /// When the crashed session started
    pub started_at: DateTime<Utc>,

    /// Crate version that was running
    pub app_version: String,
}

/// Analytics event sink
///
/// Fire-and-forget: implementations must not fail the caller. Events carry a
/// fixed name and a small key-value payload.
pub trait EventTracker {
    fn track(&self, name: &str, properties: &HashMap<String, String>);
}

/// Crash state of the previous run
pub trait CrashReporter {
    /// Did the previous session end without a clean shutdown?
    fn has_crashed_last_session(&self) -> bool;

    /// Report for the crashed session, when one is available
    fn last_session_report(&self) -> Option<CrashReport>;
}
