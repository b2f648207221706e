//! Arena Shooter - survive waves of pursuing hostiles in a bounded arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, session phases)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Input routing and frame pacing
//! - `ui`: Menu buttons and overlay text layout
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::{ConfigError, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default target frame rate; one simulation tick per frame
    pub const TARGET_FPS: u32 = 60;
    /// Fixed simulation timestep at the default frame rate
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Window title / page title
    pub const TITLE: &str = "Arena Shooter";
}

/// Format whole seconds as `m:ss`
pub fn format_clock(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
