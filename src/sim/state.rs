//! Session state and phase transitions
//!
//! `GameState` is the single owner of every entity collection. Only `tick`
//! and the transition methods here mutate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionScales;
use super::cooldown::Cooldown;
use super::hostile::Hostile;
use super::player::Player;
use super::projectile::Projectile;
use super::spawn::{SpawnScheduler, spawn_point};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with Play / Exit
    Menu,
    /// Active gameplay
    Running,
    /// Simulation frozen, Resume / Exit offered
    Paused,
    /// Player died; score shown until acknowledged
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Wall-clock seconds spent Running this run
    pub elapsed_secs: u64,
    pub kills: u32,
    /// Present during Running and Paused
    pub player: Option<Player>,
    /// Live hostiles (sorted by id)
    pub hostiles: Vec<Hostile>,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    pub spawner: SpawnScheduler,
    pub fire_cooldown: Cooldown,
    /// Last known pointer position (aim point)
    pub pointer: Vec2,
    /// Score of the run that just ended
    pub final_score: Option<u64>,
    /// Set when the user chose to quit
    pub exit_requested: bool,
    next_id: u32,
}

impl GameState {
    /// Create a session on the title menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let pointer = tuning.player_start_pos();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            time_ticks: 0,
            elapsed_secs: 0,
            kills: 0,
            player: None,
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            spawner: SpawnScheduler::new(&tuning),
            fire_cooldown: Cooldown::ready(tuning.fire_cooldown_ticks),
            pointer,
            final_score: None,
            exit_requested: false,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn collision_scales(&self) -> CollisionScales {
        CollisionScales {
            projectile_hit: self.tuning.projectile_hit_scale,
            contact: self.tuning.contact_scale,
        }
    }

    /// Score is elapsed seconds times kills
    pub fn score(&self) -> u64 {
        self.elapsed_secs * self.kills as u64
    }

    /// Menu -> Running, or restart from any phase
    pub fn start_run(&mut self) {
        self.time_ticks = 0;
        self.elapsed_secs = 0;
        self.kills = 0;
        self.final_score = None;
        self.hostiles.clear();
        self.projectiles.clear();
        self.spawner = SpawnScheduler::new(&self.tuning);
        self.fire_cooldown = Cooldown::ready(self.tuning.fire_cooldown_ticks);
        self.player = Some(Player::new(self.tuning.player_start_pos(), &self.tuning));
        self.spawn_hostiles(self.tuning.initial_hostiles);
        self.phase = GamePhase::Running;
        log::info!(
            "Run started (seed {}, {} hostiles)",
            self.seed,
            self.hostiles.len()
        );
    }

    pub fn pause(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        // Releases are not routed while paused, so forget what was held
        if let Some(player) = self.player.as_mut() {
            player.release_all();
        }
        self.phase = GamePhase::Paused;
        log::info!("Paused at tick {}", self.time_ticks);
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            log::info!("Resumed");
        }
    }

    /// Running -> GameOver
    pub fn end_run(&mut self) {
        let score = self.score();
        self.final_score = Some(score);
        self.player = None;
        self.projectiles.clear();
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over: {}s x {} kills = {}",
            self.elapsed_secs,
            self.kills,
            score
        );
    }

    /// GameOver -> Menu
    pub fn acknowledge(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.hostiles.clear();
            self.phase = GamePhase::Menu;
        }
    }

    pub fn request_exit(&mut self) {
        if !self.exit_requested {
            log::info!("Exit requested");
        }
        self.exit_requested = true;
    }

    /// Place `count` new hostiles in the ring cells
    pub fn spawn_hostiles(&mut self, count: u32) {
        let arena = self.tuning.arena_size();
        for _ in 0..count {
            let pos = spawn_point(&mut self.rng, arena, self.tuning.spawn_grid);
            let id = self.next_entity_id();
            self.hostiles.push(Hostile::new(id, pos, &self.tuning));
            log::debug!("Hostile {} spawned at ({:.0}, {:.0})", id, pos.x, pos.y);
        }
    }

    /// Fire one projectile from the player toward the pointer
    pub fn fire_projectile(&mut self) {
        let Some(origin) = self.player.as_ref().map(|p| p.pos) else {
            return;
        };
        let id = self.next_entity_id();
        let target = self.pointer;
        self.projectiles
            .push(Projectile::new(id, origin, target, &self.tuning));
    }

    /// Ensure deterministic iteration order
    pub fn normalize_order(&mut self) {
        self.hostiles.sort_by_key(|h| h.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_menu_without_player() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.player.is_none());
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_start_run_resets_everything() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        state.kills = 9;
        state.elapsed_secs = 30;
        state.time_ticks = 500;
        state.spawn_hostiles(4);
        state.fire_projectile();

        state.start_run();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.kills, 0);
        assert_eq!(state.elapsed_secs, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.hostiles.len(), state.tuning.initial_hostiles as usize);
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.pos, state.tuning.player_start_pos());
        assert_eq!(player.health, state.tuning.player_max_health);
    }

    #[test]
    fn test_pause_releases_held_intents() {
        use crate::sim::entity::Direction;

        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        let player = state.player.as_mut().unwrap();
        player.apply_intent(Direction::Up, true);
        player.set_firing(true);

        state.pause();

        let player = state.player.as_ref().unwrap();
        assert!(player.held.is_empty());
        assert!(!player.firing);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_end_run_scores_time_times_kills() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        state.elapsed_secs = 42;
        state.kills = 3;
        state.end_run();
        assert_eq!(state.final_score, Some(126));
        assert!(state.player.is_none());
        state.acknowledge();
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = GameState::new(5, Tuning::default());
        state.start_run();
        state.spawn_hostiles(10);
        let mut ids: Vec<u32> = state.hostiles.iter().map(|h| h.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.hostiles.len());
    }
}
