//! Simulated real-time metric feed for pulseboard.
//!
//! A periodic sampler maintains a bounded rolling window of generated
//! samples plus a derived current-stats map, and publishes both as one
//! immutable snapshot per tick over a watch channel. Any number of chart
//! and stat renderers can subscribe; none can ever observe a window and
//! stats pair from different ticks.

pub mod config;
pub mod error;
pub mod simulator;

pub use config::FeedConfig;
pub use error::{FeedError, FeedResult};
pub use simulator::{FeedSimulator, FeedSnapshot};
