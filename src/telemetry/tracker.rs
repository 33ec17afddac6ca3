//! Log-backed analytics tracker

use std::collections::HashMap;

use super::EventTracker;

/// [`EventTracker`] that emits events through the `log` facade
///
/// Each event becomes one structured line under the `analytics` target, with
/// the payload serialized as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventTracker;

impl LogEventTracker {
    pub fn new() -> Self {
        Self
    }
}

impl EventTracker for LogEventTracker {
    fn track(&self, name: &str, properties: &HashMap<String, String>) {
        let payload = serde_json::to_string(properties)
            .unwrap_or_else(|_| "{}".to_string());
        log::info!(target: "analytics", "event={} properties={}", name, payload);
    }
}
