use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots and pacing redraws.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    /// Minimum spacing between frames. `None` = unpaced.
    interval: Option<Duration>,
}

impl FrameClock {
    /// Creates an unpaced clock with default clamps.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            interval: None,
        }
    }

    /// Creates a clock that paces frames to `fps`. Zero disables pacing.
    pub fn with_target_fps(fps: u32) -> Self {
        let mut clock = Self::new();
        clock.interval = (fps > 0).then(|| Duration::from_secs(1) / fps);
        clock
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { dt_min, dt_max, ..Self::new() }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Earliest instant the next frame should start.
    pub fn next_deadline(&self) -> Instant {
        match self.interval {
            Some(interval) => self.last + interval,
            None => self.last,
        }
    }

    /// Whether a frame may be produced at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
