use std::time::{Duration, Instant};

/// Snapshot produced by [`FrameClock::tick`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Zero-based index of this frame. Wraps on overflow.
    pub frame_index: u64,

    /// Seconds since the previous tick, clamped to the clock's bounds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,
}

/// Counts frames and measures the delta between them.
///
/// The first tick reports index 0. Delta time is clamped so that a debugger
/// pause or a minimized window does not produce a pathological `dt`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    next_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    const DT_MIN: Duration = Duration::from_micros(100);

    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    pub fn with_max_dt(dt_max: Duration) -> Self {
        debug_assert!(dt_max >= Self::DT_MIN);
        Self {
            last: Instant::now(),
            next_index: 0,
            dt_max,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(Self::DT_MIN, self.dt_max);
        self.last = now;

        let frame_index = self.next_index;
        self.next_index = self.next_index.wrapping_add(1);

        FrameTime {
            frame_index,
            dt: dt.as_secs_f32(),
            now,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_frame_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.next_index, 2);
    }

    #[test]
    fn index_wraps_instead_of_overflowing() {
        let mut clock = FrameClock::new();
        clock.next_index = u64::MAX;
        assert_eq!(clock.tick().frame_index, u64::MAX);
        assert_eq!(clock.tick().frame_index, 0);
    }

    #[test]
    fn dt_stays_within_bounds() {
        let mut clock = FrameClock::with_max_dt(Duration::from_millis(5));
        clock.last = Instant::now()
            .checked_sub(Duration::from_secs(10))
            .unwrap_or_else(Instant::now);

        let ft = clock.tick();
        assert!(ft.dt <= 0.005 + f32::EPSILON);

        let ft = clock.tick();
        assert!(ft.dt >= FrameClock::DT_MIN.as_secs_f32());
    }
}
