//! Idle/demo driver that plays the game through ordinary input events

use glam::Vec2;

use super::input::{InputEvent, Key};
use crate::sim::{Direction, DirectionSet, GamePhase, GameState, MenuAction, menu};

/// Hostiles closer than this make the autopilot back off
const DANGER_RADIUS: f32 = 160.0;
/// Fraction of the arena kept as a margin before steering back to center
const EDGE_MARGIN: f32 = 0.15;

/// Emits the events a player would, based on the current state
#[derive(Debug, Default)]
pub struct Autopilot {
    held: DirectionSet,
    firing: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for the next tick
    pub fn drive(&mut self, state: &GameState) -> Vec<InputEvent> {
        let mut events = Vec::new();
        match state.phase {
            GamePhase::Menu | GamePhase::GameOver => {
                // Pausing or dying drops whatever we held
                self.held.clear();
                self.firing = false;
                let arena = state.tuning.arena_size();
                if let Some(button) = menu::buttons(state.phase, arena)
                    .into_iter()
                    .find(|b| b.action == MenuAction::Primary)
                {
                    events.push(InputEvent::PointerDown(button.center()));
                    events.push(InputEvent::PointerUp);
                }
            }
            GamePhase::Paused => {
                self.held.clear();
                self.firing = false;
            }
            GamePhase::Running => self.drive_running(state, &mut events),
        }
        events
    }

    fn drive_running(&mut self, state: &GameState, events: &mut Vec<InputEvent>) {
        let Some(player) = state.player.as_ref() else {
            return;
        };

        let nearest = state.hostiles.iter().min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        match nearest {
            Some(hostile) => {
                events.push(InputEvent::PointerMove(hostile.pos));
                if !self.firing {
                    events.push(InputEvent::PointerDown(hostile.pos));
                    self.firing = true;
                }
            }
            None if self.firing => {
                events.push(InputEvent::PointerUp);
                self.firing = false;
            }
            None => {}
        }

        let mut desired = Vec2::ZERO;
        if let Some(hostile) = nearest {
            let away = player.pos - hostile.pos;
            if away.length() < DANGER_RADIUS {
                desired += away.normalize_or_zero();
            }
        }
        let arena = state.tuning.arena_size();
        let margin = arena * EDGE_MARGIN;
        let pos = player.pos;
        if pos.x < margin.x || pos.x > arena.x - margin.x || pos.y < margin.y || pos.y > arena.y - margin.y {
            desired += (arena / 2.0 - pos).normalize_or_zero();
        }

        let mut want = DirectionSet::default();
        if desired.x > 0.3 {
            want.insert(Direction::Right);
        } else if desired.x < -0.3 {
            want.insert(Direction::Left);
        }
        if desired.y > 0.3 {
            want.insert(Direction::Down);
        } else if desired.y < -0.3 {
            want.insert(Direction::Up);
        }

        for dir in Direction::ALL {
            match (self.held.contains(dir), want.contains(dir)) {
                (false, true) => events.push(InputEvent::KeyDown(Key::Move(dir))),
                (true, false) => events.push(InputEvent::KeyUp(Key::Move(dir))),
                _ => {}
            }
        }
        self.held = want;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::InputRouter;
    use crate::sim::{Hostile, TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_clicks_play_from_menu() {
        let mut state = GameState::new(1, Tuning::default());
        let mut pilot = Autopilot::new();
        let mut router = InputRouter::new();
        router.extend(pilot.drive(&state));
        tick(&mut state, &router.take());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_flees_and_fires_at_nearby_hostile() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        state.hostiles.clear();
        let player_pos = state.player.as_ref().unwrap().pos;
        let id = state.next_entity_id();
        let tuning = state.tuning.clone();
        state
            .hostiles
            .push(Hostile::new(id, player_pos + Vec2::new(60.0, 0.0), &tuning));

        let mut pilot = Autopilot::new();
        let events = pilot.drive(&state);
        assert!(events.contains(&InputEvent::KeyDown(Key::Move(Direction::Left))));
        assert!(events.iter().any(|e| matches!(e, InputEvent::PointerDown(_))));

        // Held keys are not re-sent
        let again = pilot.drive(&state);
        assert!(!again.iter().any(|e| matches!(e, InputEvent::KeyDown(_))));
    }

    #[test]
    fn test_demo_session_survives_a_while() {
        let mut state = GameState::new(42, Tuning::default());
        let mut pilot = Autopilot::new();
        let mut router = InputRouter::new();
        let mut max_waves = 0;
        let mut saw_shot = false;
        for _ in 0..600 {
            router.extend(pilot.drive(&state));
            tick(&mut state, &router.take());
            max_waves = max_waves.max(state.spawner.waves);
            saw_shot |= !state.projectiles.is_empty();
        }
        // Contact damage needs far longer than one spawn interval to kill
        assert!(saw_shot, "autopilot never fired");
        assert!(max_waves >= 1, "no wave spawned while the autopilot played");
        tick(
            &mut state,
            &TickInput {
                quit: true,
                ..Default::default()
            },
        );
        assert!(state.exit_requested);
    }
}
