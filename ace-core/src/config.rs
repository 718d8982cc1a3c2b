//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::Deserialize;

use crate::error::Result;

/// Knobs for a [`Runtime`](crate::reactive::Runtime).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Keep running the rest of a batch when one computation fails.
    ///
    /// When false, the first failure stops the batch and the computations
    /// that did not run stay queued, in order, for the next flush.
    pub isolate_failures: bool,

    /// Upper bound on the batches [`Runtime::settle`](crate::reactive::Runtime::settle)
    /// will run before giving up.
    pub max_settle_batches: usize,

    /// Deep mode used by [`ReactiveOptions::inherit`](crate::reactive::ReactiveOptions::inherit).
    pub deep_by_default: bool,

    /// Tracked-target count at which a flush also prunes buckets of dropped
    /// targets. The mark doubles past the live count after each prune.
    /// Zero leaves pruning to explicit [`Runtime::prune`](crate::reactive::Runtime::prune) calls.
    pub prune_threshold: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            isolate_failures: true,
            max_settle_batches: 64,
            deep_by_default: false,
            prune_threshold: 256,
        }
    }
}

impl RuntimeConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
