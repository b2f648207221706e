//! Selectable screen regions for the Menu, Paused and GameOver phases

use glam::Vec2;
use serde::Serialize;

use super::state::GamePhase;

/// Button size in arena pixels
pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 48.0);
/// Vertical offset of each button from the arena's vertical midpoint
pub const BUTTON_SPACING: f32 = 40.0;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuAction {
    /// Play (Menu), Resume (Paused), back to Menu (GameOver)
    Primary,
    Exit,
}

/// A clickable rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub action: MenuAction,
    pub min: Vec2,
    pub max: Vec2,
}

impl Button {
    fn centered(label: &'static str, action: MenuAction, center: Vec2) -> Self {
        let half = BUTTON_SIZE / 2.0;
        Self {
            label,
            action,
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Inclusive on all four edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Buttons shown for a phase; empty while Running
pub fn buttons(phase: GamePhase, arena: Vec2) -> Vec<Button> {
    let primary = match phase {
        GamePhase::Menu => "Play",
        GamePhase::Paused => "Resume",
        GamePhase::GameOver => "Menu",
        GamePhase::Running => return Vec::new(),
    };
    let mid = arena / 2.0;
    vec![
        Button::centered(
            primary,
            MenuAction::Primary,
            Vec2::new(mid.x, mid.y - BUTTON_SPACING),
        ),
        Button::centered("Exit", MenuAction::Exit, Vec2::new(mid.x, mid.y + BUTTON_SPACING)),
    ]
}

/// Resolve a click against the buttons of a phase
pub fn hit_test(phase: GamePhase, arena: Vec2, point: Vec2) -> Option<MenuAction> {
    buttons(phase, arena)
        .into_iter()
        .find(|b| b.contains(point))
        .map(|b| b.action)
}
