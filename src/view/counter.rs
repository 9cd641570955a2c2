//! Count-up animation for the statistics line.
//!
//! Purely cosmetic: the final frame always shows the exact target values,
//! and callers that cannot redraw in place print that frame directly.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::time::{Instant, MissedTickBehavior};

pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);

/// Roughly one display refresh.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// `1 - (1 - t)^2`, with `t` clamped to `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A number counting up from zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    pub target: u64,
    pub duration: Duration,
}

impl Counter {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The value to show `elapsed` after the animation started.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.is_done(elapsed) {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = (ease_out_quad(progress) * self.target as f64).floor() as u64;
        value.min(self.target)
    }
}

/// Redraws one line per frame until every counter has reached its target,
/// then writes the final line followed by a newline.
///
/// `render` receives the current value of each counter, in order.
pub async fn animate<W, F>(out: &mut W, counters: &[Counter], render: F) -> Result<()>
where
    W: Write,
    F: Fn(&[u64]) -> String,
{
    let start = Instant::now();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let elapsed = start.elapsed();
        if counters.iter().all(|c| c.is_done(elapsed)) {
            break;
        }
        let values: Vec<u64> = counters.iter().map(|c| c.value_at(elapsed)).collect();
        write!(out, "\r{}", render(&values))?;
        out.flush()?;
    }

    let finals: Vec<u64> = counters.iter().map(|c| c.target).collect();
    writeln!(out, "\r{}", render(&finals))?;
    out.flush()?;
    Ok(())
}
