//! Frame snapshot -> vertex list (arena coordinates)

use glam::Vec2;

use super::shapes::{circle, lerp_color, rect, ring};
use super::vertex::{Vertex, colors};
use crate::sim::{FrameSnapshot, GamePhase};

const ACTOR_SEGMENTS: u32 = 20;
const PROJECTILE_SEGMENTS: u32 = 8;

/// Build all geometry for one frame, back to front
pub fn build_vertices(snapshot: &FrameSnapshot) -> Vec<Vertex> {
    let mut vertices = rect(Vec2::ZERO, snapshot.arena, colors::ARENA_FLOOR);

    for projectile in &snapshot.projectiles {
        vertices.extend(circle(
            projectile.pos,
            projectile.radius,
            colors::PROJECTILE,
            PROJECTILE_SEGMENTS,
        ));
    }

    for hostile in &snapshot.hostiles {
        // Fade toward the wounded color as health drops
        let color = lerp_color(
            colors::HOSTILE_WOUNDED,
            colors::HOSTILE_HEALTHY,
            hostile.health,
        );
        vertices.extend(circle(hostile.pos, hostile.radius, color, ACTOR_SEGMENTS));
    }

    if let Some(player) = &snapshot.player {
        vertices.extend(circle(player.pos, player.radius, colors::PLAYER, ACTOR_SEGMENTS));
        // Health ring shrinks in thickness as the player is hurt
        let thickness = 1.0 + 3.0 * player.health;
        vertices.extend(ring(
            player.pos,
            player.radius,
            player.radius + thickness,
            colors::PLAYER_RING,
            ACTOR_SEGMENTS,
        ));
    }

    if snapshot.phase != GamePhase::Running {
        vertices.extend(rect(Vec2::ZERO, snapshot.arena, colors::DIM));
    }

    for button in &snapshot.buttons {
        vertices.extend(rect(button.min, button.max, colors::BUTTON));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_running_frame_has_actor_geometry() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_run();
        let snap = FrameSnapshot::capture(&state);
        let verts = build_vertices(&snap);
        let floor = 6;
        let hostiles = snap.hostiles.len() * (ACTOR_SEGMENTS as usize * 3);
        let player = ACTOR_SEGMENTS as usize * 3 + ACTOR_SEGMENTS as usize * 6;
        assert_eq!(verts.len(), floor + hostiles + player);
    }

    #[test]
    fn test_menu_frame_dims_and_draws_buttons() {
        let state = GameState::new(1, Tuning::default());
        let verts = build_vertices(&FrameSnapshot::capture(&state));
        // floor + dim + two buttons
        assert_eq!(verts.len(), 6 * 4);
        assert_eq!(verts[6].color, colors::DIM);
    }
}
