//! Frame driver
//!
//! Owns the current [`Session`] and routes every frame through it. Restart
//! swaps in a new session between frames, so a tick never sees a session
//! that is half rebuilt.

use std::sync::Arc;

use glam::Vec2;

use crate::config::{ConfigError, GameConfig};
use crate::input::InputState;
use crate::sim::{Session, TickInput};

/// Composition root: current session, input and frame timing
#[derive(Debug)]
pub struct FrameDriver {
    session: Session,
    input: InputState,
    max_dt: f32,
    /// Timestamp of the previous frame (seconds)
    last_time: Option<f64>,
    frames: u64,
}

impl FrameDriver {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = Arc::new(config.build_layout()?);
        let session = Session::new(layout, config.rules(), config.seed);
        Ok(Self {
            session,
            input: InputState::new(),
            max_dt: config.max_frame_dt,
            last_time: None,
            frames: 0,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clamp a raw frame delta to `[0, max_frame_dt]`
    pub fn clamp_dt(&self, raw: f32) -> f32 {
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, self.max_dt)
    }

    /// Run one frame at wall-clock time `now` (seconds), using polled input
    pub fn frame(&mut self, now: f64) {
        let raw = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        let input = self.input.poll();
        self.advance(raw, &input);
    }

    /// Run one frame with an explicit delta and input
    ///
    /// A pending restart is applied first, and only if the session has ended.
    pub fn advance(&mut self, dt: f32, input: &TickInput) {
        if self.input.take_restart() {
            if self.session.is_ended() {
                self.restart();
            } else {
                log::warn!(
                    "Restart ignored: {} NPCs still alive",
                    self.session.remaining_npcs()
                );
            }
        }

        let dt = self.clamp_dt(dt);
        self.session.tick(input, dt);
        self.frames += 1;
    }

    /// Replace the current session with a fresh one
    pub fn restart(&mut self) {
        self.session = self.session.restart();
    }
}

/// Demo steering: head for the nearest live NPC in the player's room
///
/// Rooms are sealed, so once the player's room is clear the nearest NPC
/// elsewhere is targeted and the player ends up pressed against a wall.
pub fn autopilot_input(session: &Session) -> TickInput {
    let player = session.player().pos();
    let home = session
        .rooms()
        .iter()
        .find(|room| room.contains_point(player))
        .copied();

    let nearest = |in_home: bool| {
        session
            .npcs()
            .iter()
            .filter(|n| n.alive)
            .filter(|n| !in_home || home.is_some_and(|room| room.contains_point(n.pos())))
            .map(|n| n.pos())
            .min_by(|a, b| {
                a.distance_squared(player)
                    .partial_cmp(&b.distance_squared(player))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    };

    let Some(target) = nearest(true).or_else(|| nearest(false)) else {
        return TickInput::default();
    };

    // Dead zone stops axis jitter near the target
    let dead_zone = session.rules().body_radius * 0.25;
    let delta: Vec2 = target - player;
    TickInput {
        up: delta.y < -dead_zone,
        down: delta.y > dead_zone,
        left: delta.x < -dead_zone,
        right: delta.x > dead_zone,
    }
}
