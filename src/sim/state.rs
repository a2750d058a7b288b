//! Session state and entity types
//!
//! A `Session` owns every mutable entity of one play-through. Restarting
//! builds a new `Session`; nothing is reset in place.

use std::sync::Arc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::Layout;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// NPCs remain; the simulation advances every tick
    Playing,
    /// Every NPC is dead; ticks are ignored until restart
    Ended,
}

/// Circular collision footprint (center + radius)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Circle-circle contact, touching included
    #[inline]
    pub fn touches(&self, other: &Body) -> bool {
        let min_dist = self.radius + other.radius;
        self.pos.distance_squared(other.pos) <= min_dist * min_dist
    }
}

/// The player-controlled avatar
///
/// Carries no alive flag: the player is never killed, only respawned on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Movement speed (pixels/s)
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            body: Body::new(pos, radius),
            speed,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }
}

/// A stationary non-player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: u32,
    pub body: Body,
    pub alive: bool,
}

impl Npc {
    pub fn new(id: u32, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            body: Body::new(pos, radius),
            alive: true,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }
}

/// Decorative mark left where an NPC died. Never collides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stain {
    pub pos: Vec2,
    pub radius: f32,
    /// NPC that left this stain
    pub npc_id: u32,
}

/// Per-session entity parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Shared by player and NPCs
    pub body_radius: f32,
    pub player_speed: f32,
    pub stain_radius: f32,
    /// Distance kept between spawned NPCs and the room edges
    pub spawn_margin: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            body_radius: BODY_RADIUS,
            player_speed: PLAYER_SPEED,
            stain_radius: STAIN_RADIUS,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

/// Render-facing view of a session
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub generation: u32,
    pub ticks: u64,
    pub player: Vec2,
    pub npcs: Vec<(Vec2, bool)>,
    pub stains: Vec<Vec2>,
}

/// One play-through: player, NPCs, stains and phase
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) layout: Arc<Layout>,
    rules: Rules,
    seed: u64,
    /// Number of restarts that led to this session
    generation: u32,
    pub(crate) phase: GamePhase,
    pub(crate) ticks: u64,
    pub(crate) player: Player,
    /// Fixed for the session, ordered by id
    pub(crate) npcs: Vec<Npc>,
    pub(crate) stains: Vec<Stain>,
}

impl Session {
    /// Spawn a fresh session: player at the center of room 0, one NPC in
    /// room 0 and the rest in uniformly chosen rooms (repeats allowed)
    pub fn new(layout: Arc<Layout>, rules: Rules, seed: u64) -> Self {
        Self::spawn(layout, rules, seed, 0)
    }

    fn spawn(layout: Arc<Layout>, rules: Rules, seed: u64, generation: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let home = layout.rooms()[0];
        let player = Player::new(home.center(), rules.body_radius, rules.player_speed);

        let mut npcs = Vec::with_capacity(NPC_COUNT);
        for id in 0..NPC_COUNT as u32 {
            let room_idx = if id == 0 {
                0
            } else {
                rng.random_range(0..layout.room_count())
            };
            let pos = spawn_point(&layout.rooms()[room_idx], rules.spawn_margin, &mut rng);
            npcs.push(Npc::new(id, pos, rules.body_radius));
        }

        log::info!(
            "Session {} started (seed {:#x}) with {} NPCs",
            generation,
            seed,
            npcs.len()
        );

        Self {
            layout,
            rules,
            seed,
            generation,
            phase: GamePhase::Playing,
            ticks: 0,
            player,
            npcs,
            stains: Vec::with_capacity(NPC_COUNT),
        }
    }

    /// Build a session around explicitly placed entities (scripted scenarios)
    ///
    /// NPC ids are reassigned in slice order. An empty NPC list starts ended.
    pub fn from_parts(layout: Arc<Layout>, rules: Rules, player: Player, npcs: Vec<Npc>) -> Self {
        let npcs: Vec<Npc> = npcs
            .into_iter()
            .enumerate()
            .map(|(i, npc)| Npc { id: i as u32, ..npc })
            .collect();
        let phase = if npcs.iter().any(|n| n.alive) {
            GamePhase::Playing
        } else {
            GamePhase::Ended
        };
        let stains = npcs
            .iter()
            .filter(|n| !n.alive)
            .map(|n| Stain {
                pos: n.pos(),
                radius: rules.stain_radius,
                npc_id: n.id,
            })
            .collect();

        Self {
            layout,
            rules,
            seed: 0,
            generation: 0,
            phase,
            ticks: 0,
            player,
            npcs,
            stains,
        }
    }

    /// Discard this session and return a fresh one on the same layout
    pub fn restart(&self) -> Session {
        let generation = self.generation.wrapping_add(1);
        // Next seed is a pure function of (seed, generation)
        let seed = self
            .seed
            .wrapping_add(u64::from(generation).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        log::info!(
            "Restarting after {} ticks ({} stains)",
            self.ticks,
            self.stains.len()
        );
        Self::spawn(Arc::clone(&self.layout), self.rules, seed, generation)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn stains(&self) -> &[Stain] {
        &self.stains
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn walls(&self) -> &[Rect] {
        self.layout.walls()
    }

    pub fn rooms(&self) -> &[Rect] {
        self.layout.rooms()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Ticks simulated while playing
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// NPCs still alive (HUD counter)
    pub fn remaining_npcs(&self) -> usize {
        self.npcs.iter().filter(|n| n.alive).count()
    }

    pub fn all_dead(&self) -> bool {
        self.npcs.iter().all(|n| !n.alive)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            generation: self.generation,
            ticks: self.ticks,
            player: self.player.pos(),
            npcs: self.npcs.iter().map(|n| (n.pos(), n.alive)).collect(),
            stains: self.stains.iter().map(|s| s.pos).collect(),
        }
    }
}

/// Uniform point inside `room`, kept `margin` away from its edges
///
/// An axis too short for the margin collapses to the room's center line, so
/// the point never leaves the room.
fn spawn_point(room: &Rect, margin: f32, rng: &mut Pcg32) -> Vec2 {
    let axis = |start: f32, len: f32, rng: &mut Pcg32| {
        let span = len - margin * 2.0;
        if span < 0.0 {
            start + len / 2.0
        } else {
            start + margin + rng.random::<f32>() * span
        }
    };
    let x = axis(room.x, room.w, rng);
    let y = axis(room.y, room.h, rng);
    Vec2::new(x, y)
}
