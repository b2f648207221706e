//! Capabilities shared by every simulated actor

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement intent held by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in arena coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }
}

/// Set of currently held directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Removing a direction that is not held is a no-op
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

/// Which sprite the renderer should draw for an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Hostile,
    Projectile,
}

/// Capability set every actor implements
///
/// No default methods: a new actor kind cannot compile without all of them.
pub trait Body {
    fn kind(&self) -> SpriteKind;
    fn pos(&self) -> Vec2;
    /// Collision radius
    fn footprint(&self) -> f32;
    fn is_alive(&self) -> bool;
    /// Move by one tick
    fn advance(&mut self);
}
