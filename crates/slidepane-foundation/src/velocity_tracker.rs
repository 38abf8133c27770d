//! Release-velocity estimation from timestamped translation samples.
//!
//! The pane controller needs an instantaneous horizontal velocity on the
//! `Ended` sample. Hosts whose gesture layer already reports one can skip
//! this module; hosts that only see raw pointer moves feed them through a
//! [`VelocityTracker`] and read the estimate at release.

/// Ring buffer capacity for tracked samples.
const CAPACITY: usize = 16;

/// Samples older than this are ignored when estimating velocity.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped moving.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct TimedPosition {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over a sliding window of recent samples.
///
/// Samples live in a fixed ring buffer; new samples overwrite the oldest.
/// Positions within the last [`HORIZON_MS`] milliseconds (and not separated
/// by a stop-length gap) are fitted with a least-squares line; the slope is
/// the velocity estimate in units per second.
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<TimedPosition>; CAPACITY],
    head: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; CAPACITY],
            head: 0,
        }
    }

    /// Records a pointer position at the given timestamp (milliseconds).
    ///
    /// Timestamps are expected to be monotonically non-decreasing; a sample
    /// older than the newest one is dropped with a warning.
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        if let Some(newest) = self.samples[self.head] {
            if time_ms < newest.time_ms {
                log::warn!(
                    "velocity sample at {}ms is older than newest {}ms, dropping",
                    time_ms,
                    newest.time_ms
                );
                return;
            }
        }
        self.head = (self.head + 1) % CAPACITY;
        self.samples[self.head] = Some(TimedPosition { time_ms, position });
    }

    /// Estimated velocity in units per second.
    ///
    /// Returns `0.0` when fewer than two usable samples fall inside the
    /// horizon, or when the most recent gap says the pointer stopped.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples[self.head] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Walk backwards from the newest sample, collecting the usable
        // window into fixed scratch arrays; the cut-offs are sample age and
        // the first stop-length gap.
        let mut times = [0.0f64; CAPACITY];
        let mut positions = [0.0f64; CAPACITY];
        let mut count = 0;
        let mut index = self.head;
        let mut younger = newest;
        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = younger.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            times[count] = -(age as f64);
            positions[count] = sample.position as f64;
            younger = sample;
            count += 1;
            if count == CAPACITY {
                break;
            }
            index = if index == 0 { CAPACITY - 1 } else { index - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        // Least-squares slope of position over time, in units/ms.
        let n = count as f64;
        let (mut sum_t, mut sum_p, mut sum_tt, mut sum_tp) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for i in 0..count {
            sum_t += times[i];
            sum_p += positions[i];
            sum_tt += times[i] * times[i];
            sum_tp += times[i] * positions[i];
        }
        let denom = n * sum_tt - sum_t * sum_t;
        if denom == 0.0 {
            return 0.0;
        }
        let slope_per_ms = (n * sum_tp - sum_t * sum_p) / denom;
        (slope_per_ms * 1000.0) as f32
    }

    /// Estimated velocity clamped to `max_velocity` in either direction.
    pub fn velocity_clamped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        self.velocity().clamp(-max_velocity, max_velocity)
    }

    /// Drops all tracked samples.
    pub fn reset(&mut self) {
        self.samples = [None; CAPACITY];
        self.head = 0;
    }
}
