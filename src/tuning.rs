//! Data-driven game balance
//!
//! Every gameplay constant lives here so a settings file can override it.
//! Speeds are in arena pixels per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    /// Arena width (also the canvas/window width)
    pub arena_width: f32,
    /// Arena height
    pub arena_height: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_radius: f32,
    pub player_max_health: f32,
    /// Start position as a fraction of the arena size
    pub player_start: (f32, f32),

    // === Hostiles ===
    pub hostile_speed: f32,
    pub hostile_radius: f32,
    pub hostile_health: f32,
    /// Damage applied to the player per overlapping tick
    pub hostile_contact_damage: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_damage: f32,
    /// Ticks between shots while the fire button is held
    pub fire_cooldown_ticks: u32,

    // === Spawning ===
    /// Hostiles placed when a run starts
    pub initial_hostiles: u32,
    /// Ticks between spawn waves
    pub spawn_interval_ticks: u32,
    /// Hostiles per wave at the start of a run
    pub initial_batch: u32,
    /// Waves between batch size increases (0 = never grow)
    pub batch_growth_every: u32,
    pub max_batch: u32,
    /// Arena divisions per axis for spawn cells (min 3)
    pub spawn_grid: u32,

    // === Collision footprint scale ===
    /// Projectile vs hostile
    pub projectile_hit_scale: f32,
    /// Hostile vs player
    pub contact_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,

            player_speed: 4.0,
            player_radius: 16.0,
            player_max_health: 100.0,
            player_start: (0.5, 0.5),

            hostile_speed: 1.5,
            hostile_radius: 14.0,
            hostile_health: 30.0,
            hostile_contact_damage: 0.5,

            projectile_speed: 10.0,
            projectile_radius: 3.0,
            projectile_damage: 10.0,
            fire_cooldown_ticks: 8,

            initial_hostiles: 3,
            spawn_interval_ticks: 120,
            initial_batch: 1,
            batch_growth_every: 10,
            max_batch: 5,
            spawn_grid: 3,

            projectile_hit_scale: 1.0,
            contact_scale: 0.8,
        }
    }
}

impl Tuning {
    /// Arena extents as a vector
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Player spawn point in arena coordinates
    pub fn player_start_pos(&self) -> Vec2 {
        Vec2::new(
            self.arena_width * self.player_start.0,
            self.arena_height * self.player_start.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "hostile_speed": 3.0 }"#).unwrap();
        assert_eq!(tuning.hostile_speed, 3.0);
        assert_eq!(tuning.arena_width, Tuning::default().arena_width);
    }

    #[test]
    fn test_collision_scales_differ_by_default() {
        let tuning = Tuning::default();
        assert_ne!(tuning.projectile_hit_scale, tuning.contact_scale);
    }

    #[test]
    fn test_player_start_is_arena_center() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player_start_pos(), Vec2::new(400.0, 300.0));
    }
}
