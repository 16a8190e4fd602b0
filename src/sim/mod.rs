//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through the tick's delta argument
//! - Seeded RNG only
//! - Stable iteration order (AI cycles by index)
//! - No rendering or platform dependencies

pub mod autonomy;
pub mod collision;
pub mod state;
pub mod tick;
pub mod trail;

pub use autonomy::{MovementPattern, heading_to_center};
pub use collision::{point_segment_distance, trail_hit};
pub use state::{
    Actor, ActorId, AiCycle, ArenaState, Coin, GameEvent, SpawnPoint, AI_COLORS, AI_SPAWN_POINTS,
    COIN_SEED_POSITIONS, PLAYER_COLOR,
};
pub use tick::{TickInput, tick};
pub use trail::{RibbonMesh, Trail};
