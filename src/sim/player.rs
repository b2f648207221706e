//! The player-controlled actor

use glam::Vec2;

use super::entity::{Body, Direction, DirectionSet, SpriteKind};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    /// Directions currently held down
    pub held: DirectionSet,
    /// Fire button held
    pub firing: bool,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            speed: tuning.player_speed,
            held: DirectionSet::default(),
            firing: false,
        }
    }

    /// Press or release a movement direction
    pub fn apply_intent(&mut self, dir: Direction, pressed: bool) {
        if pressed {
            self.held.insert(dir);
        } else {
            self.held.remove(dir);
        }
    }

    pub fn set_firing(&mut self, firing: bool) {
        self.firing = firing;
    }

    /// Drop every held intent (used when input routing is suspended)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.firing = false;
    }

    /// Health may go negative; death is `health <= 0`
    pub fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
    }

    /// Velocity from held directions, summed per axis so opposites cancel
    pub fn intent_velocity(&self) -> Vec2 {
        self.held
            .iter()
            .fold(Vec2::ZERO, |acc, dir| acc + dir.unit() * self.speed)
    }
}

impl Body for Player {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Player
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn footprint(&self) -> f32 {
        self.radius
    }

    fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    fn advance(&mut self) {
        self.vel = self.intent_velocity();
        self.pos += self.vel;
    }
}
