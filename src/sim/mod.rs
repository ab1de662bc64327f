//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Time only enters through [`SimClock`] deltas
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond opaque asset handles

pub mod clock;
pub mod coins;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use clock::SimClock;
pub use coins::{coin_band, generate_coins};
pub use collision::Rect;
pub use input::{HeldKeys, Key};
pub use state::{
    Character, Coin, GameEvent, GamePhase, Player, ROSTER_SIZE, Session,
    character_index_for_level,
};
pub use tick::{start_level, tick};
