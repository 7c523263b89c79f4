//! Cluster option handling: two sources with defined precedence.
//!
//! Options are forwarded verbatim to `L.markerClusterGroup`; nothing is
//! validated beyond serializability. A legacy `options` mapping is applied
//! first, individual ad-hoc entries second, so later entries win on key
//! collision.
use serde_json::{Map, Value};
use tracing::debug;

/// Options for the client-side cluster group.
///
/// Built from an optional legacy mapping plus any number of ad-hoc entries.
/// [`ClusterOptions::merged`] resolves precedence: legacy first, entries
/// second, later wins.
#[derive(Debug, Clone, Default)]
pub struct ClusterOptions {
    legacy: Map<String, Value>,
    entries: Vec<(String, Value)>,
}

impl ClusterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the legacy options mapping. Entries added via
    /// [`ClusterOptions::with_entry`] override it on key collision.
    pub fn with_legacy(mut self, options: Map<String, Value>) -> Self {
        self.legacy = options;
        self
    }

    /// Add a single option entry. Overrides the legacy mapping and any
    /// earlier entry with the same key.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.legacy.is_empty() && self.entries.is_empty()
    }

    /// Resolve both sources into one mapping with deterministic key order.
    pub fn merged(&self) -> Map<String, Value> {
        let mut merged = self.legacy.clone();
        for (key, value) in &self.entries {
            if let Some(previous) = merged.insert(key.clone(), value.clone()) {
                if previous != *value {
                    debug!("option '{}' overrides an earlier value", key);
                }
            }
        }
        merged
    }
}
