//! The periodic sample generator.
//!
//! `FeedSimulator` is a two-state machine (Idle, Running). Starting spawns
//! a tick task guarded by a `CancellationToken`; stopping cancels the
//! token and awaits the task, so no tick can fire after `stop()` returns.
//! Dropping a running simulator cancels the token as well, so the
//! recurring task never outlives its owner.

use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use pulseboard_core::{MetricMap, MetricRange, RollingWindow, Sample};

use crate::config::FeedConfig;
use crate::error::{FeedError, FeedResult};

/// One published state pair: the retained window plus the derived
/// current stats, from the same tick. Immutable once published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// Tick sequence number, 1-based. 0 only for the pre-start snapshot.
    pub tick: u64,
    /// Retained samples, oldest first.
    pub window: Vec<Sample>,
    /// Latest generated values, including stats-only metrics that are
    /// never retained in the window.
    pub stats: MetricMap,
}

/// Handle to a running tick task.
struct RunningFeed {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Periodic sample generator with atomic snapshot publication.
pub struct FeedSimulator {
    tx: watch::Sender<FeedSnapshot>,
    running: Option<RunningFeed>,
}

impl FeedSimulator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FeedSnapshot::default());
        Self { tx, running: None }
    }

    /// Subscribe to published snapshots.
    ///
    /// Receivers observe each tick's window and stats as one value; a
    /// receiver that lags simply skips to the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.tx.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Transition Idle -> Running.
    ///
    /// Validates the configuration synchronously; on rejection the
    /// simulator stays Idle. Starting while Running is an error.
    pub fn start(&mut self, config: FeedConfig) -> FeedResult<()> {
        if self.running.is_some() {
            return Err(FeedError::AlreadyRunning);
        }
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            interval_ms = config.interval_ms,
            capacity = config.capacity,
            metrics = config.ranges.len(),
            aux_metrics = config.aux_ranges.len(),
            "Starting feed simulator"
        );

        let token = CancellationToken::new();
        let task = TickTask {
            window: RollingWindow::new(config.capacity),
            last_metrics: config.initial.clone(),
            seq: 0,
            rng,
            config,
            tx: self.tx.clone(),
            token: token.clone(),
        };
        let handle = tokio::spawn(task.run());
        self.running = Some(RunningFeed { token, handle });
        Ok(())
    }

    /// Transition Running -> Idle.
    ///
    /// Cancels the pending schedule and awaits task termination: once
    /// this returns, no further tick fires. No-op when Idle.
    pub async fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.token.cancel();
            // Cancellation is cooperative; a tick already executing runs
            // to completion before the task observes the token.
            let _ = running.handle.await;
            info!("Feed simulator stopped");
        }
    }
}

impl Default for FeedSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FeedSimulator {
    fn drop(&mut self) {
        if let Some(running) = &self.running {
            running.token.cancel();
        }
    }
}

/// State owned by the spawned tick task.
struct TickTask {
    config: FeedConfig,
    window: RollingWindow,
    last_metrics: MetricMap,
    seq: u64,
    rng: StdRng,
    tx: watch::Sender<FeedSnapshot>,
    token: CancellationToken,
}

impl TickTask {
    async fn run(mut self) {
        let token = self.token.clone();
        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.interval_ms));
        // The first interval tick completes immediately; the first
        // sample lands one full interval after start.
        interval.tick().await;

        loop {
            tokio::select! {
                // Cancellation takes priority over a due tick.
                biased;
                () = token.cancelled() => {
                    debug!(ticks = self.seq, "Feed tick task cancelled");
                    return;
                }
                _ = interval.tick() => {
                    self.tick();
                }
            }
        }
    }

    /// Generate one sample and publish the new snapshot.
    fn tick(&mut self) {
        self.seq += 1;

        // Draw configured metrics; anything else keeps its last value.
        let mut metrics = self.last_metrics.clone();
        for (name, range) in &self.config.ranges {
            metrics.insert(name.clone(), draw(&mut self.rng, range));
        }
        self.last_metrics = metrics.clone();

        let label = Local::now().format("%H:%M").to_string();
        let sample = Sample::new(label, metrics);
        self.window.push(sample);

        // Derived stats: the latest sample's metrics plus independently
        // resampled stats-only metrics.
        let mut stats = self
            .window
            .latest()
            .map(|s| s.metrics.clone())
            .unwrap_or_default();
        for (name, range) in &self.config.aux_ranges {
            stats.insert(name.clone(), draw(&mut self.rng, range));
        }

        let snapshot = FeedSnapshot {
            tick: self.seq,
            window: self.window.to_vec(),
            stats,
        };
        // Publish window and stats as one value; no receiver can pair
        // this window with another tick's stats.
        self.tx.send_replace(snapshot);
        trace!(tick = self.seq, window_len = self.window.len(), "Published feed snapshot");
    }
}

fn draw(rng: &mut StdRng, range: &MetricRange) -> f64 {
    if range.min == range.max {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_config() -> FeedConfig {
        let mut config = FeedConfig {
            interval_ms: 3000,
            capacity: 6,
            seed: Some(7),
            ..Default::default()
        };
        config
            .ranges
            .insert("users".to_string(), MetricRange::new(40.0, 70.0));
        config
    }

    async fn next_snapshot(rx: &mut watch::Receiver<FeedSnapshot>) -> FeedSnapshot {
        rx.changed().await.expect("sender alive");
        rx.borrow_and_update().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_eight_ticks_fill_window_to_capacity() {
        let mut sim = FeedSimulator::new();
        let mut rx = sim.subscribe();
        sim.start(users_config()).unwrap();

        let mut snapshot = FeedSnapshot::default();
        for expected_tick in 1..=8u64 {
            snapshot = next_snapshot(&mut rx).await;
            assert_eq!(snapshot.tick, expected_tick);
            assert_eq!(snapshot.window.len(), (expected_tick as usize).min(6));
        }

        for sample in &snapshot.window {
            let users = sample.metric("users").unwrap();
            assert!((40.0..=70.0).contains(&users), "users={users}");
        }
        // Stats mirror the last appended sample.
        let last_users = snapshot.window.last().unwrap().metric("users").unwrap();
        assert_eq!(snapshot.stats.get("users"), Some(&last_users));

        sim.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_retains_most_recent_in_order() {
        let mut config = users_config();
        config.capacity = 3;
        let mut sim = FeedSimulator::new();
        let mut rx = sim.subscribe();
        sim.start(config).unwrap();

        let mut appended: Vec<Sample> = Vec::new();
        for _ in 0..7 {
            let snapshot = next_snapshot(&mut rx).await;
            appended.push(snapshot.window.last().unwrap().clone());
            // Window is exactly the most recent appends, oldest first.
            let expected: Vec<Sample> = appended
                .iter()
                .rev()
                .take(3)
                .rev()
                .cloned()
                .collect();
            assert_eq!(snapshot.window, expected);
        }

        sim.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_stop() {
        let mut sim = FeedSimulator::new();
        let mut rx = sim.subscribe();
        sim.start(users_config()).unwrap();

        next_snapshot(&mut rx).await;
        next_snapshot(&mut rx).await;
        sim.stop().await;
        assert!(!sim.is_running());

        // Wait well past the interval; no further snapshot may appear.
        tokio::time::sleep(Duration::from_millis(3000 * 3)).await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(rx.borrow().tick, 2);
    }

    #[tokio::test]
    async fn test_invalid_range_rejected_and_stays_idle() {
        let mut config = FeedConfig::default();
        config
            .ranges
            .insert("x".to_string(), MetricRange::new(5.0, 1.0));

        let mut sim = FeedSimulator::new();
        let err = sim.start(config).unwrap_err();
        assert!(matches!(err, FeedError::InvalidConfig(_)));
        assert!(!sim.is_running());
    }

    #[tokio::test]
    async fn test_start_while_running_rejected() {
        let mut sim = FeedSimulator::new();
        sim.start(users_config()).unwrap();
        let err = sim.start(users_config()).unwrap_err();
        assert!(matches!(err, FeedError::AlreadyRunning));
        sim.stop().await;
    }

    #[tokio::test]
    async fn test_stop_while_idle_is_noop() {
        let mut sim = FeedSimulator::new();
        sim.stop().await;
        assert!(!sim.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unconfigured_metrics_carry_forward() {
        let mut config = users_config();
        config.initial.insert("memory".to_string(), 55.0);
        let mut sim = FeedSimulator::new();
        let mut rx = sim.subscribe();
        sim.start(config).unwrap();

        for _ in 0..3 {
            let snapshot = next_snapshot(&mut rx).await;
            let latest = snapshot.window.last().unwrap();
            // "memory" has no range: it keeps its last value every tick.
            assert_eq!(latest.metric("memory"), Some(55.0));
            assert!(latest.metric("users").is_some());
        }

        sim.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_aux_metrics_in_stats_but_not_window() {
        let mut config = users_config();
        config
            .aux_ranges
            .insert("load".to_string(), MetricRange::new(0.0, 100.0));
        let mut sim = FeedSimulator::new();
        let mut rx = sim.subscribe();
        sim.start(config).unwrap();

        let snapshot = next_snapshot(&mut rx).await;
        let load = *snapshot.stats.get("load").unwrap();
        assert!((0.0..=100.0).contains(&load));
        for sample in &snapshot.window {
            assert!(sample.metric("load").is_none());
        }

        sim.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_runs_are_deterministic() {
        async fn run_once() -> Vec<f64> {
            let mut sim = FeedSimulator::new();
            let mut rx = sim.subscribe();
            sim.start(users_config()).unwrap();
            let mut values = Vec::new();
            for _ in 0..4 {
                let snap = next_snapshot(&mut rx).await;
                values.push(snap.window.last().unwrap().metric("users").unwrap());
            }
            sim.stop().await;
            values
        }
        assert_eq!(run_once().await, run_once().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_tick_task() {
        let mut sim = FeedSimulator::new();
        let mut rx = sim.subscribe();
        sim.start(users_config()).unwrap();
        next_snapshot(&mut rx).await;

        drop(sim);
        // Sender dropped with the simulator; the cancelled task publishes
        // nothing further.
        tokio::time::sleep(Duration::from_millis(3000 * 3)).await;
        assert_eq!(rx.borrow().tick, 1);
    }
}
