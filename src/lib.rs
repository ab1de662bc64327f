//! Coin Hop - A timed coin-collecting platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, physics, coins, game session)
//! - `renderer`: Read-only views of the session (HUD, overlay, ASCII frame)
//! - `platform`: Collaborator contracts (time source, key codes, assets)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, Session};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Player box and spawn point
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 50.0;
    /// Spawn height and coin anchor, measured up from the bottom edge
    pub const ANCHOR_OFFSET: f32 = 100.0;

    /// Jump physics (per frame, not scaled by dt)
    pub const JUMP_FORCE: f32 = -12.0;
    pub const GRAVITY: f32 = 0.6;

    /// Coins
    pub const COIN_SIZE: f32 = 16.0;
    pub const POWER_UP_SCALE: f32 = 2.0;
    pub const BASE_COINS: u32 = 10;
    pub const COINS_PER_LEVEL: u32 = 5;
    /// Lowest a coin may sit above the anchor line
    pub const COIN_MIN_CLEARANCE: f32 = 50.0;
    /// Fraction of the max jump height used for the power-up band
    pub const POWER_UP_BAND: f32 = 0.7;

    /// Timers (milliseconds)
    pub const GAME_DURATION_MS: f64 = 30_000.0;
    pub const POST_ROUND_MS: f64 = 5_000.0;
}

/// Maximum height reachable from a standing jump: `h = v0² / (2g)`
#[inline]
pub fn max_jump_height(jump_force: f32, gravity: f32) -> f32 {
    (jump_force * jump_force) / (2.0 * gravity)
}

/// Number of coins laid out for a 1-based level
#[inline]
pub fn coins_for_level(level: u32, base: u32, per_level: u32) -> u32 {
    base + level.saturating_sub(1) * per_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_max_jump_height_defaults() {
        let h = max_jump_height(JUMP_FORCE, GRAVITY);
        assert!((h - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_coins_for_level_progression() {
        assert_eq!(coins_for_level(1, BASE_COINS, COINS_PER_LEVEL), 10);
        assert_eq!(coins_for_level(2, BASE_COINS, COINS_PER_LEVEL), 15);
        assert_eq!(coins_for_level(5, BASE_COINS, COINS_PER_LEVEL), 30);
        // Level 0 is not valid but must not underflow
        assert_eq!(coins_for_level(0, BASE_COINS, COINS_PER_LEVEL), 10);
    }
}
