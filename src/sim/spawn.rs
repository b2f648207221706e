//! Hostile spawn timing and placement
//!
//! Placement uses the ring of cells around the arena center:
//!
//! ```text
//! | TopLeft    | TopMid    | TopRight    |
//! | MidLeft    |  (empty)  | MidRight    |
//! | BottomLeft | BottomMid | BottomRight |
//! ```
//!
//! The center cell is never used, which keeps the player's start area clear.

use glam::Vec2;
use rand::Rng;

use super::cooldown::Cooldown;
use crate::tuning::Tuning;

/// One of the eight cells surrounding the arena center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnCell {
    TopLeft,
    TopMid,
    TopRight,
    MidLeft,
    MidRight,
    BottomLeft,
    BottomMid,
    BottomRight,
}

/// Band along one axis: near edge, middle, far edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Near,
    Middle,
    Far,
}

impl Band {
    fn range(self, extent: f32, grid: u32) -> (f32, f32) {
        let cell = extent / grid.max(3) as f32;
        match self {
            Band::Near => (0.0, cell),
            Band::Middle => (cell, extent - cell),
            Band::Far => (extent - cell, extent),
        }
    }
}

impl SpawnCell {
    pub const ALL: [SpawnCell; 8] = [
        SpawnCell::TopLeft,
        SpawnCell::TopMid,
        SpawnCell::TopRight,
        SpawnCell::MidLeft,
        SpawnCell::MidRight,
        SpawnCell::BottomLeft,
        SpawnCell::BottomMid,
        SpawnCell::BottomRight,
    ];

    /// (column band, row band)
    fn bands(self) -> (Band, Band) {
        match self {
            SpawnCell::TopLeft => (Band::Near, Band::Near),
            SpawnCell::TopMid => (Band::Middle, Band::Near),
            SpawnCell::TopRight => (Band::Far, Band::Near),
            SpawnCell::MidLeft => (Band::Near, Band::Middle),
            SpawnCell::MidRight => (Band::Far, Band::Middle),
            SpawnCell::BottomLeft => (Band::Near, Band::Far),
            SpawnCell::BottomMid => (Band::Middle, Band::Far),
            SpawnCell::BottomRight => (Band::Far, Band::Far),
        }
    }

    /// Inclusive (min, max) corners of this cell
    pub fn bounds(self, arena: Vec2, grid: u32) -> (Vec2, Vec2) {
        let (col, row) = self.bands();
        let (x0, x1) = col.range(arena.x, grid);
        let (y0, y1) = row.range(arena.y, grid);
        (Vec2::new(x0, y0), Vec2::new(x1, y1))
    }
}

/// Pick a ring cell uniformly, then a point uniformly inside it
pub fn spawn_point<R: Rng>(rng: &mut R, arena: Vec2, grid: u32) -> Vec2 {
    let cell = SpawnCell::ALL[rng.random_range(0..SpawnCell::ALL.len())];
    let (min, max) = cell.bounds(arena, grid);
    Vec2::new(
        rng.random_range(min.x..=max.x),
        rng.random_range(min.y..=max.y),
    )
}

/// Decides when hostiles enter and how many arrive at once
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    timer: Cooldown,
    /// Hostiles per wave
    pub batch_size: u32,
    /// Waves spawned this run
    pub waves: u32,
    growth_every: u32,
    max_batch: u32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: Cooldown::new(tuning.spawn_interval_ticks.max(1)),
            batch_size: tuning.initial_batch.max(1),
            waves: 0,
            growth_every: tuning.batch_growth_every,
            max_batch: tuning.max_batch.max(tuning.initial_batch),
        }
    }

    /// Ticks counted toward the next wave
    pub fn countdown(&self) -> u32 {
        self.timer.count
    }

    /// Count one tick; returns how many hostiles to spawn now
    pub fn tick(&mut self) -> u32 {
        if !self.timer.step() {
            return 0;
        }
        let batch = self.batch_size;
        self.waves += 1;
        if self.growth_every > 0 && self.waves % self.growth_every == 0 {
            self.batch_size = (self.batch_size + 1).min(self.max_batch);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn in_center_cell(p: Vec2, arena: Vec2) -> bool {
        let (cx, cy) = (arena.x / 3.0, arena.y / 3.0);
        p.x > cx && p.x < arena.x - cx && p.y > cy && p.y < arena.y - cy
    }

    #[test]
    fn test_spawn_points_avoid_center_and_stay_inside() {
        let arena = Vec2::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..5000 {
            let p = spawn_point(&mut rng, arena, 3);
            assert!(!in_center_cell(p, arena), "spawned in center: {:?}", p);
            assert!(p.x >= 0.0 && p.x <= arena.x && p.y >= 0.0 && p.y <= arena.y);
        }
    }

    #[test]
    fn test_every_ring_cell_used() {
        let arena = Vec2::new(900.0, 900.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = [false; 8];
        for _ in 0..2000 {
            let p = spawn_point(&mut rng, arena, 3);
            let idx = SpawnCell::ALL.iter().position(|c| {
                let (min, max) = c.bounds(arena, 3);
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
            });
            if let Some(i) = idx {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_finer_grid_shrinks_edge_cells() {
        let arena = Vec2::new(800.0, 600.0);
        let (min, max) = SpawnCell::TopLeft.bounds(arena, 4);
        assert_eq!(min, Vec2::ZERO);
        assert_eq!(max, Vec2::new(200.0, 150.0));
        // Grid below 3 would have no ring; clamped
        let (_, max) = SpawnCell::TopLeft.bounds(arena, 1);
        assert!((max.x - 800.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_scheduler_batches_and_growth() {
        let tuning = Tuning {
            spawn_interval_ticks: 5,
            initial_batch: 1,
            batch_growth_every: 2,
            max_batch: 2,
            ..Tuning::default()
        };
        let mut sched = SpawnScheduler::new(&tuning);
        let spawned: Vec<u32> = (0..30).map(|_| sched.tick()).filter(|n| *n > 0).collect();
        // Waves at ticks 5, 10, 15, ... ; growth after every second wave, capped at 2
        assert_eq!(spawned, vec![1, 1, 2, 2, 2, 2]);
        assert_eq!(sched.waves, 6);
    }

    #[test]
    fn test_scheduler_quiet_between_waves() {
        let mut sched = SpawnScheduler::new(&Tuning::default());
        let interval = Tuning::default().spawn_interval_ticks;
        for _ in 1..interval {
            assert_eq!(sched.tick(), 0);
        }
        assert_eq!(sched.tick(), 1);
        assert_eq!(sched.countdown(), 0);
    }
}
