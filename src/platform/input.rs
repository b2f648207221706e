//! Raw device events -> per-tick simulation input

use glam::Vec2;

use crate::sim::{Direction, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Direction),
    Pause,
    Quit,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_web_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Key::Move(Direction::Up)),
            "ArrowDown" | "s" | "S" => Some(Key::Move(Direction::Down)),
            "ArrowLeft" | "a" | "A" => Some(Key::Move(Direction::Left)),
            "ArrowRight" | "d" | "D" => Some(Key::Move(Direction::Right)),
            "p" | "P" => Some(Key::Pause),
            "Escape" => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Device-level event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(Vec2),
    PointerUp,
    PointerMove(Vec2),
    /// Once per real second
    ClockSecond,
    Quit,
}

/// Collects events between ticks and hands them over as one `TickInput`
#[derive(Debug, Default)]
pub struct InputRouter {
    pending: TickInput,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        let input = &mut self.pending;
        match event {
            InputEvent::KeyDown(Key::Move(dir)) => input.moves.push((dir, true)),
            InputEvent::KeyUp(Key::Move(dir)) => input.moves.push((dir, false)),
            InputEvent::KeyDown(Key::Pause) => input.pause = true,
            InputEvent::KeyDown(Key::Quit) => input.quit = true,
            InputEvent::KeyUp(Key::Pause | Key::Quit) => {}
            InputEvent::PointerDown(pos) => {
                input.pointer = Some(pos);
                input.click = Some(pos);
                input.fire = Some(true);
                input.fire_pressed = true;
            }
            InputEvent::PointerUp => input.fire = Some(false),
            InputEvent::PointerMove(pos) => input.pointer = Some(pos),
            InputEvent::ClockSecond => input.clock_secs += 1,
            InputEvent::Quit => input.quit = true,
        }
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.push(event);
        }
    }

    /// Take everything collected since the last tick
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_web_key_mapping() {
        assert_eq!(Key::from_web_key("ArrowLeft"), Some(Key::Move(Direction::Left)));
        assert_eq!(Key::from_web_key("W"), Some(Key::Move(Direction::Up)));
        assert_eq!(Key::from_web_key("p"), Some(Key::Pause));
        assert_eq!(Key::from_web_key("Escape"), Some(Key::Quit));
        assert_eq!(Key::from_web_key("q"), None);
    }

    #[test]
    fn test_router_collects_and_clears() {
        let mut router = InputRouter::new();
        router.extend([
            InputEvent::KeyDown(Key::Move(Direction::Up)),
            InputEvent::PointerMove(Vec2::new(5.0, 6.0)),
            InputEvent::KeyUp(Key::Move(Direction::Up)),
            InputEvent::ClockSecond,
            InputEvent::ClockSecond,
        ]);
        let input = router.take();
        assert_eq!(input.moves, vec![(Direction::Up, true), (Direction::Up, false)]);
        assert_eq!(input.pointer, Some(Vec2::new(5.0, 6.0)));
        assert_eq!(input.clock_secs, 2);
        assert_eq!(router.take(), TickInput::default());
    }

    #[test]
    fn test_pointer_down_is_click_and_fire() {
        let mut router = InputRouter::new();
        router.push(InputEvent::PointerDown(Vec2::new(1.0, 2.0)));
        let input = router.take();
        assert_eq!(input.click, Some(Vec2::new(1.0, 2.0)));
        assert_eq!(input.fire, Some(true));
        router.push(InputEvent::PointerUp);
        assert_eq!(router.take().fire, Some(false));
    }

    #[test]
    fn test_escape_quits() {
        let mut router = InputRouter::new();
        router.push(InputEvent::KeyUp(Key::Quit));
        assert!(!router.take().quit);

        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        router.push(InputEvent::KeyDown(Key::Quit));
        tick(&mut state, &router.take());
        assert!(state.exit_requested);
    }

    #[test]
    fn test_tap_within_one_tick_fires() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        state.hostiles.clear();

        let mut router = InputRouter::new();
        router.extend([
            InputEvent::PointerDown(Vec2::new(700.0, 300.0)),
            InputEvent::PointerUp,
        ]);
        let input = router.take();
        assert_eq!(input.fire, Some(false));
        assert!(input.fire_pressed);

        tick(&mut state, &input);
        assert_eq!(state.projectiles.len(), 1);
        assert!(!state.player.as_ref().unwrap().firing);

        // Released, so nothing more once the cooldown recharges
        for _ in 0..2 * state.tuning.fire_cooldown_ticks {
            tick(&mut state, &router.take());
        }
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_pause_and_quit() {
        let mut router = InputRouter::new();
        router.push(InputEvent::KeyUp(Key::Pause));
        assert!(!router.take().pause);
        router.extend([InputEvent::KeyDown(Key::Pause), InputEvent::Quit]);
        let input = router.take();
        assert!(input.pause && input.quit);
    }
}
