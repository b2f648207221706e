//! Pursuing hostiles

use glam::Vec2;

use super::entity::{Body, SpriteKind};
use super::geometry::{bearing_angle, delta_product_below, heading};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: f32,
    pub speed: f32,
    pub contact_damage: f32,
    /// Point being pursued, refreshed every tick
    pub target: Vec2,
    /// Arrival predicate held on the last advance
    pub arrived: bool,
}

impl Hostile {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: tuning.hostile_radius,
            health: tuning.hostile_health,
            speed: tuning.hostile_speed,
            contact_damage: tuning.hostile_contact_damage,
            target: pos,
            arrived: false,
        }
    }

    pub fn set_steering_target(&mut self, point: Vec2) {
        self.target = point;
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
    }
}

impl Body for Hostile {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Hostile
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
        // Product of axis deltas against the footprint radius, re-evaluated every tick
        self.arrived = delta_product_below(self.pos, self.target, self.radius);
        self.vel = if self.arrived {
            Vec2::ZERO
        } else {
            heading(bearing_angle(self.pos, self.target)) * self.speed
        };
        self.pos += self.vel;
    }
}
