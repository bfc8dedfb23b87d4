//! Tick pacing for the frame loop.
//!
//! The loop does not depend on wall-clock time for motion; the clock only
//! spaces ticks by a short fixed delay to bound CPU use, and measures FPS.

use std::time::{Duration, Instant};

/// Pause between the end of one tick and the start of the next.
pub const TICK_DELAY: Duration = Duration::from_millis(1);

/// Frame counter and tick scheduler.
#[derive(Debug)]
pub struct FrameClock {
    /// When the last tick happened.
    last_tick: Instant,
    /// Ticks since start.
    frame_count: u64,
    /// Minimum spacing between ticks.
    delay: Duration,
    /// FPS estimate, refreshed every `fps_update_interval`.
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl FrameClock {
    /// A clock whose first tick is due immediately.
    pub fn new(delay: Duration) -> Self {
        let now = Instant::now();
        Self {
            last_tick: now.checked_sub(delay).unwrap_or(now),
            frame_count: 0,
            delay,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a tick at `now`.
    ///
    /// Returns the new FPS estimate when it was refreshed by this tick.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.last_tick = now;
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed < self.fps_update_interval {
            return None;
        }
        let frames_since = self.frame_count - self.fps_frame_count;
        self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        Some(self.fps)
    }

    /// Earliest instant the next tick may run.
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + self.delay
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_due() {
        let clock = FrameClock::default();
        assert!(clock.is_due(Instant::now()));
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn test_tick_schedules_next_deadline() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let now = Instant::now();
        clock.tick(now);
        assert_eq!(clock.frame(), 1);
        assert_eq!(clock.next_deadline(), now + Duration::from_millis(5));
        assert!(!clock.is_due(now + Duration::from_millis(4)));
        assert!(clock.is_due(now + Duration::from_millis(5)));
    }

    #[test]
    fn test_fps_refreshes_after_interval() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        for i in 1..10 {
            assert_eq!(clock.tick(start + Duration::from_millis(i * 10)), None);
        }
        let fps = clock.tick(start + Duration::from_secs(1)).unwrap();
        assert!(fps > 0.0);
        assert_eq!(clock.fps(), fps);
        assert_eq!(clock.frame(), 10);
    }
}
