//! Overlay text layout (HUD, menus, game over)
//!
//! Produces positioned strings in arena coordinates; the platform layer
//! decides how to draw them (DOM on the web, log lines when headless).

use glam::Vec2;

use crate::format_clock;
use crate::sim::{FrameSnapshot, GamePhase};

/// Margin from the arena edge for HUD text
const HUD_MARGIN: f32 = 16.0;
/// Title distance above the vertical midpoint
const TITLE_OFFSET: f32 = 120.0;

/// Horizontal anchoring of a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// A string placed on screen
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Anchor point (baseline center for `Align::Center`)
    pub pos: Vec2,
    pub align: Align,
    /// Font size in arena pixels
    pub size: f32,
}

impl TextItem {
    fn new(text: impl Into<String>, pos: Vec2, align: Align, size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            align,
            size,
        }
    }
}

/// Build the overlay for a frame; `fps` adds a counter when present
pub fn overlay(snapshot: &FrameSnapshot, fps: Option<u32>) -> Vec<TextItem> {
    let arena = snapshot.arena;
    let mid = arena / 2.0;
    let title_pos = Vec2::new(mid.x, mid.y - TITLE_OFFSET);
    let mut items = Vec::new();

    let title = match snapshot.phase {
        GamePhase::Menu => Some(crate::consts::TITLE.to_string()),
        GamePhase::Paused => Some("Paused".to_string()),
        GamePhase::GameOver => Some("Game Over".to_string()),
        GamePhase::Running => None,
    };
    if let Some(title) = title {
        items.push(TextItem::new(title, title_pos, Align::Center, 48.0));
    }

    if matches!(snapshot.phase, GamePhase::Running | GamePhase::Paused) {
        items.push(TextItem::new(
            format!("Time {}", format_clock(snapshot.elapsed_secs)),
            Vec2::new(HUD_MARGIN, HUD_MARGIN + 16.0),
            Align::Left,
            20.0,
        ));
        items.push(TextItem::new(
            format!("Kills {}", snapshot.kills),
            Vec2::new(arena.x - HUD_MARGIN, HUD_MARGIN + 16.0),
            Align::Right,
            20.0,
        ));
        if let Some(player) = &snapshot.player {
            items.push(TextItem::new(
                format!("HP {:.0}%", player.health * 100.0),
                Vec2::new(HUD_MARGIN, HUD_MARGIN + 40.0),
                Align::Left,
                20.0,
            ));
        }
    }

    if snapshot.phase == GamePhase::GameOver {
        items.push(TextItem::new(
            format!(
                "Score {}  ({} x {} kills)",
                snapshot.final_score.unwrap_or(0),
                format_clock(snapshot.elapsed_secs),
                snapshot.kills
            ),
            Vec2::new(mid.x, title_pos.y + 50.0),
            Align::Center,
            24.0,
        ));
    }

    for button in &snapshot.buttons {
        items.push(TextItem::new(button.label, button.center(), Align::Center, 28.0));
    }

    if let Some(fps) = fps {
        items.push(TextItem::new(
            format!("{} fps", fps),
            Vec2::new(arena.x - HUD_MARGIN, arena.y - HUD_MARGIN),
            Align::Right,
            14.0,
        ));
    }

    items
}

/// One-line HUD summary for log output
pub fn status_line(snapshot: &FrameSnapshot) -> String {
    let hp = snapshot
        .player
        .as_ref()
        .map(|p| format!("{:.0}%", p.health * 100.0))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:?} {} | kills {} | hp {} | hostiles {} | shots {}",
        snapshot.phase,
        format_clock(snapshot.elapsed_secs),
        snapshot.kills,
        hp,
        snapshot.hostiles.len(),
        snapshot.projectiles.len()
    )
}
