//! Event-rate measurement for frames and ticks.

use bevy::prelude::*;

use crate::config::RATE_WINDOW_SECS;

/// Counts events per second over an interval refreshed about once a
/// second. The last computed rate is held between refreshes.
#[derive(Debug, Clone)]
pub struct RateMeter {
    /// Start of the current interval, unset until the first refresh
    started: Option<f64>,
    /// Events counted since `started`
    count: u64,
    rate: f64,
    interval_secs: f64,
}

impl Default for RateMeter {
    fn default() -> Self {
        Self::new(RATE_WINDOW_SECS)
    }
}

impl RateMeter {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            started: None,
            count: 0,
            rate: 0.0,
            interval_secs,
        }
    }

    /// Record one event at `now` seconds. The first event only anchors the
    /// interval.
    pub fn record(&mut self, now: f64) {
        if self.started.is_some() {
            self.count += 1;
        }
        self.refresh(now);
    }

    /// Count one event without a timestamp. The rate is computed at the
    /// next [`refresh`](Self::refresh).
    pub fn tally(&mut self) {
        self.count += 1;
    }

    /// Close the interval if it has run for at least `interval_secs`.
    ///
    /// Events tallied before the first refresh are discarded.
    pub fn refresh(&mut self, now: f64) {
        let Some(started) = self.started else {
            self.started = Some(now);
            self.count = 0;
            return;
        };

        let elapsed = now - started;
        if elapsed >= self.interval_secs && elapsed > 0.0 {
            self.rate = self.count as f64 / elapsed;
            self.count = 0;
            self.started = Some(now);
        }
    }

    /// Events per second over the last closed interval, 0 before the first
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Snapshot of measured rates handed to the render step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostRates {
    /// Frames per second
    pub fps: f64,
    /// Simulation ticks per second
    pub tps: f64,
}

/// Resource tracking frame and tick rates
#[derive(Resource, Debug, Default)]
pub struct RateMeters {
    pub frames: RateMeter,
    pub ticks: RateMeter,
}

impl RateMeters {
    pub fn rates(&self) -> HostRates {
        HostRates {
            fps: self.frames.rate(),
            tps: self.ticks.rate(),
        }
    }
}

/// Record a frame and close the tick interval against the same real-time
/// instant.
///
/// Runs before the fixed loop, so the tick count covers whole frames.
pub fn record_frame(time: Res<Time<Real>>, mut meters: ResMut<RateMeters>) {
    let now = time.elapsed_secs_f64();
    meters.frames.record(now);
    meters.ticks.refresh(now);
}

/// Count a simulation tick.
///
/// Real time only advances once per frame, so ticks carry no timestamp of
/// their own.
pub fn record_tick(mut meters: ResMut<RateMeters>) {
    meters.ticks.tally();
}
