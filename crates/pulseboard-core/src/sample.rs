//! Feed sample types and the rolling retention window.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Metric name to value mapping.
///
/// `BTreeMap` keeps serialized output in a stable key order.
pub type MetricMap = BTreeMap<String, f64>;

/// Inclusive value range a metric is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range is valid when both bounds are finite and `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One generated data point. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Wall-clock label at generation time ("HH:MM").
    pub label: String,
    /// Metric values carried by this sample.
    pub metrics: MetricMap,
}

impl Sample {
    pub fn new(label: impl Into<String>, metrics: MetricMap) -> Self {
        Self {
            label: label.into(),
            metrics,
        }
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// Fixed-capacity FIFO buffer of recent samples, oldest first.
///
/// Length never exceeds capacity; pushing at capacity evicts exactly the
/// oldest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingWindow {
    capacity: usize,
    samples: VecDeque<Sample>,
}

impl RollingWindow {
    /// Create an empty window.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; callers validate capacity before
    /// constructing a window.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "rolling window capacity must be positive");
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample, evicting the oldest entry when at capacity.
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Most recently appended sample.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Copy out the retained samples, oldest first.
    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: u64) -> Sample {
        let mut metrics = MetricMap::new();
        metrics.insert("seq".to_string(), n as f64);
        Sample::new(format!("12:{n:02}"), metrics)
    }

    #[test]
    fn test_window_fills_to_capacity() {
        let mut window = RollingWindow::new(3);
        window.push(sample(1));
        window.push(sample(2));
        assert_eq!(window.len(), 2);
        assert_eq!(window.latest().unwrap().metric("seq"), Some(2.0));
    }

    #[test]
    fn test_window_evicts_oldest_fifo() {
        let mut window = RollingWindow::new(3);
        for n in 1..=5 {
            window.push(sample(n));
        }
        assert_eq!(window.len(), 3);
        let seqs: Vec<f64> = window.iter().map(|s| s.metric("seq").unwrap()).collect();
        assert_eq!(seqs, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_window_capacity_one() {
        let mut window = RollingWindow::new(1);
        window.push(sample(1));
        window.push(sample(2));
        assert_eq!(window.len(), 1);
        assert_eq!(window.latest().unwrap().metric("seq"), Some(2.0));
    }

    #[test]
    fn test_range_validity() {
        assert!(MetricRange::new(1.0, 5.0).is_valid());
        assert!(MetricRange::new(5.0, 5.0).is_valid());
        assert!(!MetricRange::new(5.0, 1.0).is_valid());
        assert!(!MetricRange::new(f64::NAN, 1.0).is_valid());
    }

    #[test]
    fn test_sample_serializes_with_stable_key_order() {
        let mut metrics = MetricMap::new();
        metrics.insert("users".to_string(), 42.0);
        metrics.insert("load".to_string(), 7.0);
        let sample = Sample::new("09:30", metrics);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(
            json,
            r#"{"label":"09:30","metrics":{"load":7.0,"users":42.0}}"#
        );
    }
}
