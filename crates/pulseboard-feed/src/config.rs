//! Feed simulator configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use pulseboard_core::{MetricMap, MetricRange};

use crate::error::{FeedError, FeedResult};

/// Simulator configuration.
///
/// `ranges` drive the samples retained in the rolling window;
/// `aux_ranges` are resampled independently every tick and surface only
/// in the derived stats, never in the window (e.g. a transient load
/// percentage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Rolling window capacity in samples.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Windowed metrics: name -> inclusive draw range.
    #[serde(default)]
    pub ranges: BTreeMap<String, MetricRange>,
    /// Stats-only metrics: name -> inclusive draw range.
    #[serde(default)]
    pub aux_ranges: BTreeMap<String, MetricRange>,
    /// Seed values for metrics that carry forward without a range.
    #[serde(default)]
    pub initial: MetricMap,
    /// Fixed RNG seed for deterministic output. None = entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_interval_ms() -> u64 {
    3000
}

fn default_capacity() -> usize {
    6
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            capacity: default_capacity(),
            ranges: BTreeMap::new(),
            aux_ranges: BTreeMap::new(),
            initial: MetricMap::new(),
            seed: None,
        }
    }
}

impl FeedConfig {
    /// Validate the configuration.
    ///
    /// Rejected synchronously at `start()`: non-positive interval or
    /// capacity, and any range with `min > max` or non-finite bounds.
    pub fn validate(&self) -> FeedResult<()> {
        if self.interval_ms == 0 {
            return Err(FeedError::InvalidConfig(
                "interval_ms must be positive".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(FeedError::InvalidConfig(
                "capacity must be positive".to_string(),
            ));
        }
        for (name, range) in self.ranges.iter().chain(self.aux_ranges.iter()) {
            if !range.is_valid() {
                return Err(FeedError::InvalidConfig(format!(
                    "range for metric '{name}' is invalid: min={} max={}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}
