//! Chess clocks and the time sources that drive them.
//!
//! The clock never reads the system time itself. Every operation takes an
//! explicit `now`, and [`Game`](crate::Game) obtains it from a
//! [`TimeSource`], so tests can move time forward by hand.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use gambit_core::Color;

/// Somewhere to read the current instant from.
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A time source that only moves when told to.
///
/// Clones share the same offset, so a test can keep one handle while the
/// game owns another.
#[derive(Debug, Clone)]
pub struct ManualTime {
    base: Instant,
    elapsed_ms: Arc<AtomicU64>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move time forward by `by` (millisecond resolution).
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Default for ManualTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Instant {
        self.base + Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }
}

/// What [`ChessClock::advance`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    /// A clock is counting down and has time left.
    Running,
    /// Neither clock is counting down.
    Paused,
    /// This side has no time left.
    Flagged(Color),
}

/// Two countdown clocks, at most one of which runs at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessClock {
    remaining: [Duration; Color::COUNT],
    running: Option<(Color, Instant)>,
}

impl ChessClock {
    /// Both sides start with `time_per_side`; nothing is running.
    pub fn new(time_per_side: Duration) -> Self {
        Self {
            remaining: [time_per_side; Color::COUNT],
            running: None,
        }
    }

    /// Start `color`'s clock at `now`, stopping the other one without
    /// charging it.
    pub fn start(&mut self, color: Color, now: Instant) {
        self.running = Some((color, now));
    }

    /// Stop the running clock and charge it for the time since it started.
    ///
    /// Returns the side that was running, if any.
    pub fn stop(&mut self, now: Instant) -> Option<Color> {
        let (color, since) = self.running.take()?;
        self.charge(color, now.saturating_duration_since(since));
        Some(color)
    }

    /// Charge the running clock up to `now` and keep it running.
    pub fn advance(&mut self, now: Instant) -> ClockStatus {
        if let Some((color, since)) = self.running {
            self.charge(color, now.saturating_duration_since(since));
            self.running = Some((color, now));
        }

        match (self.running, self.flagged()) {
            (_, Some(color)) => ClockStatus::Flagged(color),
            (Some(_), None) => ClockStatus::Running,
            (None, None) => ClockStatus::Paused,
        }
    }

    /// Subtract `elapsed` from `color`'s time, clamping at zero.
    pub fn charge(&mut self, color: Color, elapsed: Duration) {
        let left = &mut self.remaining[color.index()];
        *left = left.saturating_sub(elapsed);
    }

    /// Time left for `color` as of the last charge.
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }

    /// The side whose clock is counting down.
    pub fn running(&self) -> Option<Color> {
        self.running.map(|(color, _)| color)
    }

    /// The first side (White before Black) whose time is used up.
    pub fn flagged(&self) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self.remaining(c).is_zero())
    }
}
