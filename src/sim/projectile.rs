//! Player shots

use glam::Vec2;

use super::entity::{Body, SpriteKind};
use super::geometry::{bearing_angle, delta_product_below, heading};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub damage: f32,
    /// Aim point captured at fire time; never changes
    target: Vec2,
    /// Once set the projectile coasts on its last heading
    pub arrived: bool,
    /// Consumed by a hit
    pub spent: bool,
}

impl Projectile {
    pub fn new(id: u32, origin: Vec2, target: Vec2, tuning: &Tuning) -> Self {
        let speed = tuning.projectile_speed;
        Self {
            id,
            pos: origin,
            vel: heading(bearing_angle(origin, target)) * speed,
            radius: tuning.projectile_radius,
            speed,
            damage: tuning.projectile_damage,
            target,
            arrived: false,
            spent: false,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Strictly outside `[0, size.x] x [0, size.y]`
    pub fn is_out_of(&self, size: Vec2) -> bool {
        self.pos.x < 0.0 || self.pos.x > size.x || self.pos.y < 0.0 || self.pos.y > size.y
    }
}

impl Body for Projectile {
    fn kind(&self) -> SpriteKind {
        SpriteKind::Projectile
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn footprint(&self) -> f32 {
        self.radius
    }

    fn is_alive(&self) -> bool {
        !self.spent
    }

    fn advance(&mut self) {
        if !self.arrived && delta_product_below(self.pos, self.target, self.speed * self.speed) {
            self.arrived = true;
        }
        if !self.arrived {
            self.vel = heading(bearing_angle(self.pos, self.target)) * self.speed;
        }
        self.pos += self.vel;
    }
}
