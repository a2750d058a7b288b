//! Game configuration
//!
//! Loaded from an optional JSON file; every field falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Layout, LayoutError, Rect, Rules};

/// Configuration errors (fatal to session construction)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// House rectangle; walls are built around and inside it
    pub house: Rect,
    pub room_count: usize,
    pub wall_thickness: f32,
    /// Shared by player and NPCs
    pub body_radius: f32,
    /// Player speed (pixels/s)
    pub player_speed: f32,
    pub stain_radius: f32,
    pub spawn_margin: f32,
    /// Frame delta clamp (seconds)
    pub max_frame_dt: f32,
    /// Seed for the first session's NPC placement
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            house: Rect::new(HOUSE_X, HOUSE_Y, HOUSE_WIDTH, HOUSE_HEIGHT),
            room_count: ROOM_COUNT,
            wall_thickness: WALL_THICKNESS,
            body_radius: BODY_RADIUS,
            player_speed: PLAYER_SPEED,
            stain_radius: STAIN_RADIUS,
            spawn_margin: SPAWN_MARGIN,
            max_frame_dt: MAX_FRAME_DT,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    ///
    /// Builds the layout, so room count and wall thickness errors surface
    /// here too. Bodies and spawn margins must fit the smallest room.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("body_radius", self.body_radius),
            ("player_speed", self.player_speed),
            ("stain_radius", self.stain_radius),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spawn_margin must be non-negative, got {}",
                self.spawn_margin
            )));
        }

        let layout = self.build_layout()?;
        let min_side = layout
            .rooms()
            .iter()
            .map(|room| room.w.min(room.h))
            .fold(f32::INFINITY, f32::min);
        // A body this wide touches walls on both sides at the room center
        if self.body_radius * 2.0 >= min_side {
            return Err(ConfigError::Invalid(format!(
                "body_radius {} does not fit a {min_side} room",
                self.body_radius
            )));
        }
        if self.spawn_margin * 2.0 > min_side {
            return Err(ConfigError::Invalid(format!(
                "spawn_margin {} does not fit a {min_side} room",
                self.spawn_margin
            )));
        }
        Ok(())
    }

    /// Build the wall/room layout shared by every session
    pub fn build_layout(&self) -> Result<Layout, ConfigError> {
        Ok(Layout::new(self.house, self.room_count, self.wall_thickness)?)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            body_radius: self.body_radius,
            player_speed: self.player_speed,
            stain_radius: self.stain_radius,
            spawn_margin: self.spawn_margin,
        }
    }
}
