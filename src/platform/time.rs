//! Frame pacing and the once-per-second clock

/// Accumulates frame time and reports whole elapsed seconds
///
/// Evaluated on the main loop thread; no timer thread involved.
#[derive(Debug, Clone, Default)]
pub struct SecondTimer {
    accumulated: f64,
}

impl SecondTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds; returns how many second boundaries were crossed
    pub fn advance(&mut self, dt: f64) -> u32 {
        if dt <= 0.0 {
            return 0;
        }
        self.accumulated += dt;
        let whole = self.accumulated.floor();
        self.accumulated -= whole;
        whole as u32
    }
}

/// Sleeps so the loop runs at most `fps` frames per second
#[cfg(not(target_arch = "wasm32"))]
pub struct FrameLimiter {
    frame: std::time::Duration,
    last: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: std::time::Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: std::time::Instant::now(),
        }
    }

    /// Block until the next frame is due; returns seconds since the previous frame
    pub fn wait(&mut self) -> f64 {
        let due = self.last + self.frame;
        let now = std::time::Instant::now();
        if now < due {
            std::thread::sleep(due - now);
        }
        let now = std::time::Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_timer_counts_boundaries() {
        let mut timer = SecondTimer::new();
        let ticks: u32 = (0..120).map(|_| timer.advance(1.0 / 60.0)).sum();
        assert!(ticks == 1 || ticks == 2, "got {}", ticks);

        let mut timer = SecondTimer::new();
        assert_eq!(timer.advance(2.5), 2);
        assert_eq!(timer.advance(0.5), 1);
    }

    #[test]
    fn test_long_frame_keeps_every_second() {
        // A 3.2 s hitch must report all three seconds in one go
        let mut timer = SecondTimer::new();
        assert_eq!(timer.advance(3.2), 3);
        assert_eq!(timer.advance(0.8), 1);
    }

    #[test]
    fn test_second_timer_ignores_negative() {
        let mut timer = SecondTimer::new();
        assert_eq!(timer.advance(-3.0), 0);
        assert_eq!(timer.advance(0.999), 0);
        assert_eq!(timer.advance(0.002), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_frame_limiter_paces() {
        let mut limiter = FrameLimiter::new(100);
        let dt = limiter.wait();
        assert!(dt >= 0.009, "frame too short: {}", dt);
    }
}
