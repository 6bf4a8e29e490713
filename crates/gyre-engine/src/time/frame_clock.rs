use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, after clamping.
    pub dt: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots.
///
/// Delta time is clamped so that a debugger pause or a minimized window does
/// not hand the animation a multi-second step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline, e.g. after the surface was reconfigured.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// An instant earlier than the previous tick counts as zero elapsed time
    /// and is then raised to the minimum clamp.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_tick_is_frame_zero() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        assert_eq!(clock.tick_at(start + ms(16)).frame_index, 0);
        assert_eq!(clock.tick_at(start + ms(32)).frame_index, 1);
    }

    #[test]
    fn dt_reports_elapsed_seconds() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start + ms(20));
        assert!((ft.dt - 0.020).abs() < 1e-6, "{}", ft.dt);
    }

    #[test]
    fn dt_clamped_to_maximum_after_stall() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MAX.as_secs_f32());
    }

    #[test]
    fn dt_clamped_to_minimum_on_repeat_instant() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + ms(10));
        let ft = clock.tick_at(start + ms(10));
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MIN.as_secs_f32());
    }

    #[test]
    fn custom_clamps_apply() {
        let mut clock = FrameClock::with_clamps(ms(5), ms(50));
        let start = clock.last;
        assert_eq!(clock.tick_at(start + ms(1)).dt, ms(5).as_secs_f32());
        assert_eq!(clock.tick_at(start + ms(500)).dt, ms(50).as_secs_f32());
    }
}
