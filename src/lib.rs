//! House Sweep - a walled-house arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall collision, session state)
//! - `input`: Polled keyboard state
//! - `driver`: Frame driver that owns the current session
//! - `config`: Data-driven game configuration

pub mod config;
pub mod driver;
pub mod input;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::FrameDriver;
pub use input::{InputState, Key};

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// House (outer walls sit just outside this rectangle)
    pub const HOUSE_X: f32 = 80.0;
    pub const HOUSE_Y: f32 = 80.0;
    pub const HOUSE_WIDTH: f32 = 800.0;
    pub const HOUSE_HEIGHT: f32 = 440.0;

    /// Number of vertical rooms the house is split into
    pub const ROOM_COUNT: usize = 5;
    pub const WALL_THICKNESS: f32 = 8.0;

    /// Collision radius shared by the player and every NPC
    pub const BODY_RADIUS: f32 = 14.0;
    /// Player speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 160.0;

    /// NPCs per session (one always in the player's room)
    pub const NPC_COUNT: usize = 6;
    /// Keep spawned NPCs this far from room edges
    pub const SPAWN_MARGIN: f32 = 28.0;

    pub const STAIN_RADIUS: f32 = 12.0;

    pub const DEFAULT_SEED: u64 = 0x5EED_0F_40C5;
}
