//! Read-only per-frame view of the session for the renderer and HUD

use glam::Vec2;
use serde::Serialize;

use super::entity::{Body, SpriteKind};
use super::menu::{self, Button};
use super::state::{GamePhase, GameState};

/// One drawable actor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Remaining health in 0..=1 (1 for projectiles)
    pub health: f32,
}

impl ActorView {
    fn of<B: Body>(body: &B, health: f32) -> Self {
        Self {
            kind: body.kind(),
            pos: body.pos(),
            radius: body.footprint(),
            health: health.clamp(0.0, 1.0),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub arena: Vec2,
    pub player: Option<ActorView>,
    pub hostiles: Vec<ActorView>,
    pub projectiles: Vec<ActorView>,
    pub elapsed_secs: u64,
    pub kills: u32,
    pub final_score: Option<u64>,
    pub buttons: Vec<Button>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let max_hostile_hp = state.tuning.hostile_health.max(f32::EPSILON);
        let arena = state.tuning.arena_size();
        Self {
            phase: state.phase,
            arena,
            player: state
                .player
                .as_ref()
                .map(|p| ActorView::of(p, p.health / p.max_health.max(f32::EPSILON))),
            hostiles: state
                .hostiles
                .iter()
                .map(|h| ActorView::of(h, h.health / max_hostile_hp))
                .collect(),
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ActorView::of(p, 1.0))
                .collect(),
            elapsed_secs: state.elapsed_secs,
            kills: state.kills,
            final_score: state.final_score,
            buttons: menu::buttons(state.phase, arena),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_running() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        state.fire_projectile();
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.player.as_ref().map(|p| p.kind), Some(SpriteKind::Player));
        assert_eq!(snap.hostiles.len(), state.hostiles.len());
        assert!(snap.hostiles.iter().all(|h| h.kind == SpriteKind::Hostile && h.health == 1.0));
        assert_eq!(snap.projectiles.len(), 1);
        assert!(snap.buttons.is_empty());
    }

    #[test]
    fn test_capture_menu_has_buttons_no_player() {
        let state = GameState::new(1, Tuning::default());
        let snap = FrameSnapshot::capture(&state);
        assert!(snap.player.is_none());
        assert_eq!(snap.buttons.len(), 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(1, Tuning::default());
        let json = serde_json::to_string(&FrameSnapshot::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
    }
}
