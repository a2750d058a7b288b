//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only, no clock reads
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or input-toolkit dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{circle_collides_any, rects_overlap};
pub use layout::{Layout, LayoutError};
pub use rect::Rect;
pub use state::{Body, GamePhase, Npc, Player, Rules, Session, Snapshot, Stain};
pub use tick::{TickInput, move_player, resolve_contacts, tick};
