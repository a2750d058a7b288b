//! Per-frame simulation step
//!
//! Advances the player, resolves NPC contacts and checks the win condition.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circle_collides_any;
use super::rect::Rect;
use super::state::{GamePhase, Npc, Player, Session, Stain};

/// Directional input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Movement direction; diagonals are normalized to unit length
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }

        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= std::f32::consts::FRAC_1_SQRT_2;
        }
        dir
    }

    pub fn is_idle(&self) -> bool {
        self.direction() == Vec2::ZERO
    }
}

/// Move the player for `dt` seconds, resolving X then Y against `walls`
///
/// An axis whose move would end inside a wall is dropped for this tick while
/// the other axis still applies, which gives wall sliding on diagonals.
pub fn move_player(player: &mut Player, input: &TickInput, dt: f32, walls: &[Rect]) {
    let delta = input.direction() * player.speed * dt;
    let radius = player.body.radius;

    let try_x = Vec2::new(player.body.pos.x + delta.x, player.body.pos.y);
    if !circle_collides_any(try_x, radius, walls) {
        player.body.pos.x = try_x.x;
    }

    let try_y = Vec2::new(player.body.pos.x, player.body.pos.y + delta.y);
    if !circle_collides_any(try_y, radius, walls) {
        player.body.pos.y = try_y.y;
    }
}

/// Kill every live NPC touching the player, leaving a stain for each
///
/// NPCs are visited in id order. Dead NPCs are skipped, so calling this
/// again never adds a second stain. Returns the number of NPCs killed.
pub fn resolve_contacts(
    player: &Player,
    npcs: &mut [Npc],
    stains: &mut Vec<Stain>,
    stain_radius: f32,
) -> usize {
    let mut killed = 0;
    for npc in npcs.iter_mut().filter(|n| n.alive) {
        if npc.body.touches(&player.body) {
            npc.alive = false;
            stains.push(Stain {
                pos: npc.pos(),
                radius: stain_radius,
                npc_id: npc.id,
            });
            log::debug!("NPC {} killed at ({:.1}, {:.1})", npc.id, npc.pos().x, npc.pos().y);
            killed += 1;
        }
    }
    killed
}

/// Advance the session by one step of `dt` seconds
///
/// `dt` is expected to be clamped by the caller. Does nothing once ended.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    if session.phase == GamePhase::Ended {
        return;
    }

    session.ticks += 1;

    move_player(&mut session.player, input, dt, session.layout.walls());

    let stain_radius = session.rules().stain_radius;
    resolve_contacts(
        &session.player,
        &mut session.npcs,
        &mut session.stains,
        stain_radius,
    );

    if session.all_dead() {
        session.phase = GamePhase::Ended;
        log::info!(
            "All {} NPCs down after {} ticks",
            session.npcs.len(),
            session.ticks
        );
    }
}

impl Session {
    /// See [`tick`]
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick(self, input, dt);
    }
}
