//! Fixed-rate simulation tick
//!
//! One call per rendered frame. Order inside a Running tick:
//! intents -> firing -> projectiles -> player -> hostiles -> collisions -> spawns.

use glam::Vec2;

use super::collision;
use super::entity::{Body, Direction};
use super::menu::{self, MenuAction};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Direction presses/releases in arrival order
    pub moves: Vec<(Direction, bool)>,
    /// Latest pointer position
    pub pointer: Option<Vec2>,
    /// Fire button pressed (true) or released (false); last event wins
    pub fire: Option<bool>,
    /// A press arrived this tick, even if the release followed it
    pub fire_pressed: bool,
    /// Pointer-down location, for menu selection
    pub click: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
    /// Quit signal
    pub quit: bool,
    /// Whole wall-clock seconds elapsed since the last tick
    pub clock_secs: u32,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        state.request_exit();
        return;
    }

    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }

    match state.phase {
        GamePhase::Running => {
            if input.pause {
                state.pause();
                return;
            }
            state.elapsed_secs += input.clock_secs as u64;
            run_tick(state, input);
        }
        GamePhase::Paused if input.pause => state.resume(),
        GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => {
            if let Some(click) = input.click {
                select(state, click);
            }
        }
    }
}

fn select(state: &mut GameState, click: Vec2) {
    let Some(action) = menu::hit_test(state.phase, state.tuning.arena_size(), click) else {
        return;
    };
    match (state.phase, action) {
        (_, MenuAction::Exit) => state.request_exit(),
        (GamePhase::Menu, MenuAction::Primary) => state.start_run(),
        (GamePhase::Paused, MenuAction::Primary) => state.resume(),
        (GamePhase::GameOver, MenuAction::Primary) => state.acknowledge(),
        (GamePhase::Running, MenuAction::Primary) => {}
    }
}

fn run_tick(state: &mut GameState, input: &TickInput) {
    let Some(player) = state.player.as_mut() else {
        log::warn!("Running without a player; ending run");
        state.end_run();
        return;
    };

    for &(dir, pressed) in &input.moves {
        player.apply_intent(dir, pressed);
    }
    if let Some(fire) = input.fire {
        player.set_firing(fire);
    }
    // A tap shorter than one tick still gets its shot
    let firing = player.firing || input.fire_pressed;

    state.time_ticks += 1;

    state.fire_cooldown.charge();
    if firing && state.fire_cooldown.try_consume() {
        state.fire_projectile();
    }

    let arena = state.tuning.arena_size();
    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    state.projectiles.retain(|p| !p.is_out_of(arena));

    let scales = state.collision_scales();
    let Some(player) = state.player.as_mut() else {
        return;
    };
    player.advance();

    let target = player.pos;
    for hostile in &mut state.hostiles {
        hostile.set_steering_target(target);
        hostile.advance();
    }

    let report = collision::resolve(&mut state.projectiles, &mut state.hostiles, player, scales);
    if report.kills > 0 {
        log::debug!("{} hostile(s) destroyed", report.kills);
    }
    state.kills += report.kills;

    if !player.is_alive() {
        state.end_run();
        return;
    }

    let batch = state.spawner.tick();
    if batch > 0 {
        log::debug!("Wave {}: spawning {}", state.spawner.waves, batch);
        state.spawn_hostiles(batch);
    }

    state.normalize_order();
}
