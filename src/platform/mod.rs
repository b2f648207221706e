//! Platform abstraction layer
//!
//! Handles the plumbing around the simulation:
//! - Input events -> per-tick intents
//! - Frame pacing and the wall-clock second timer
//! - Autopilot input source for demo/headless runs

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputEvent, InputRouter, Key};
#[cfg(not(target_arch = "wasm32"))]
pub use time::FrameLimiter;
pub use time::SecondTimer;
