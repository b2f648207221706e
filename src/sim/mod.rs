//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod cooldown;
pub mod entity;
pub mod geometry;
pub mod hostile;
pub mod menu;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, CollisionScales, resolve};
pub use cooldown::Cooldown;
pub use entity::{Body, Direction, DirectionSet, SpriteKind};
pub use geometry::{bearing_angle, circles_overlap};
pub use hostile::Hostile;
pub use menu::{Button, MenuAction};
pub use player::Player;
pub use projectile::Projectile;
pub use snapshot::{ActorView, FrameSnapshot};
pub use spawn::{SpawnCell, SpawnScheduler, spawn_point};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
