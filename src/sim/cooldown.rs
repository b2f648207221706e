//! Tick counters used for spawn timing and fire-rate gating

use serde::{Deserialize, Serialize};

/// Counter that climbs one step per tick toward a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    pub count: u32,
    pub threshold: u32,
}

impl Cooldown {
    /// Starts empty
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold,
        }
    }

    /// Starts at the threshold so the first use is immediate
    pub fn ready(threshold: u32) -> Self {
        Self {
            count: threshold,
            threshold,
        }
    }

    /// Count one tick; on reaching the threshold reset and report it
    pub fn step(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Count one tick without ever exceeding the threshold
    pub fn charge(&mut self) {
        self.count = (self.count + 1).min(self.threshold);
    }

    pub fn is_ready(&self) -> bool {
        self.count >= self.threshold
    }

    /// Use the charge if full
    pub fn try_consume(&mut self) -> bool {
        if self.is_ready() {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_fires_every_threshold_ticks() {
        let mut c = Cooldown::new(3);
        let fired: Vec<bool> = (0..7).map(|_| c.step()).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_charge_caps_at_threshold() {
        let mut c = Cooldown::new(2);
        for _ in 0..10 {
            c.charge();
        }
        assert_eq!(c.count, 2);
        assert!(c.try_consume());
        assert_eq!(c.count, 0);
        assert!(!c.try_consume());
    }

    #[test]
    fn test_ready_starts_full() {
        let mut c = Cooldown::ready(5);
        assert!(c.try_consume());
    }
}
