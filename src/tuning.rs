//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a JSON file can
//! override it. Missing fields fall back to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_start_x: f32,
    /// Distance of the spawn/anchor line above the bottom edge
    pub anchor_offset: f32,
    /// Initial vertical velocity of a jump (negative = up)
    pub jump_force: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,

    // === Coins ===
    pub coin_size: f32,
    pub power_up_scale: f32,
    pub base_coins: u32,
    pub coins_per_level: u32,
    pub coin_min_clearance: f32,
    pub power_up_band: f32,

    // === Timers (ms) ===
    pub game_duration_ms: f64,
    pub post_round_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_size: PLAYER_SIZE,
            player_start_x: PLAYER_START_X,
            anchor_offset: ANCHOR_OFFSET,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,

            coin_size: COIN_SIZE,
            power_up_scale: POWER_UP_SCALE,
            base_coins: BASE_COINS,
            coins_per_level: COINS_PER_LEVEL,
            coin_min_clearance: COIN_MIN_CLEARANCE,
            power_up_band: POWER_UP_BAND,

            game_duration_ms: GAME_DURATION_MS,
            post_round_ms: POST_ROUND_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Fields left out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Serialize to pretty JSON (handy as a template for overrides)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.playfield_width > 0.0) || !(self.playfield_height > 0.0) {
            log::warn!("Playfield must have a positive size, using defaults");
            self.playfield_width = defaults.playfield_width;
            self.playfield_height = defaults.playfield_height;
        }
        let fits = |size: f32, t: &Tuning| {
            size > 0.0 && size < t.playfield_width && size < t.playfield_height
        };
        if !fits(self.player_size, &self) {
            log::warn!("Player size {} does not fit the playfield", self.player_size);
            self.player_size = defaults.player_size;
        }
        if !fits(self.player_size, &self) {
            log::warn!("Playfield too small for the player, using default playfield");
            self.playfield_width = defaults.playfield_width;
            self.playfield_height = defaults.playfield_height;
        }
        if !(self.jump_force < 0.0) {
            log::warn!("Jump force must point up (negative), using default");
            self.jump_force = defaults.jump_force;
        }
        if !(self.gravity > 0.0) {
            log::warn!("Gravity must be positive, using default");
            self.gravity = defaults.gravity;
        }
        if !(self.coin_size > 0.0) || self.coin_size >= self.playfield_width {
            log::warn!("Coin size {} out of range, using default", self.coin_size);
            self.coin_size = defaults.coin_size;
        }
        if !(self.coin_size < self.playfield_width) {
            self.coin_size = self.playfield_width * 0.5;
        }
        if !(self.power_up_scale >= 1.0) {
            self.power_up_scale = defaults.power_up_scale;
        }
        if self.coin_size * self.power_up_scale > self.playfield_width {
            log::warn!("Power-up coin wider than the playfield, shrinking it");
            self.power_up_scale = (self.playfield_width / self.coin_size).max(1.0);
        }
        if self.base_coins == 0 {
            log::warn!("A level needs at least one coin, using default");
            self.base_coins = defaults.base_coins;
        }
        self.power_up_band = if self.power_up_band > 0.0 {
            self.power_up_band.min(1.0)
        } else {
            defaults.power_up_band
        };
        self.coin_min_clearance = self.coin_min_clearance.max(0.0);
        self.game_duration_ms = self.game_duration_ms.max(0.0);
        self.post_round_ms = self.post_round_ms.max(0.0);

        self
    }

    /// Floor line for the player's top edge
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.player_size
    }

    /// Spawn height and the baseline coin heights are measured from
    #[inline]
    pub fn anchor_y(&self) -> f32 {
        self.playfield_height - self.anchor_offset
    }

    /// Rightmost x the player may occupy
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        self.playfield_width - self.player_size
    }

    #[inline]
    pub fn max_jump_height(&self) -> f32 {
        crate::max_jump_height(self.jump_force, self.gravity)
    }

    #[inline]
    pub fn coins_for_level(&self, level: u32) -> u32 {
        crate::coins_for_level(level, self.base_coins, self.coins_per_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_coins": 3, "game_duration_ms": 1000.0 }"#)
            .expect("valid json");
        assert_eq!(tuning.base_coins, 3);
        assert_eq!(tuning.game_duration_ms, 1000.0);
        assert_eq!(tuning.coins_per_level, COINS_PER_LEVEL);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert!(Tuning::from_json(r#"{ "base_coins": "many" }"#).is_err());
    }

    #[test]
    fn test_sanitize_restores_broken_physics() {
        let tuning = Tuning::from_json(r#"{ "gravity": -1.0, "jump_force": 5.0, "base_coins": 0 }"#)
            .expect("valid json");
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.base_coins, BASE_COINS);
    }

    #[test]
    fn test_narrow_playfield_is_rejected() {
        let tuning = Tuning::from_json(r#"{ "playfield_width": 40.0 }"#).expect("valid json");
        assert!(tuning.max_player_x() >= 0.0);
        assert_eq!(tuning.playfield_width, PLAYFIELD_WIDTH);

        let tuning = Tuning::from_json(r#"{ "playfield_width": 60.0, "coin_size": 40.0 }"#)
            .expect("valid json");
        assert_eq!(tuning.playfield_width, 60.0);
        assert!(tuning.coin_size * tuning.power_up_scale <= tuning.playfield_width);
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = Tuning::default().to_json().expect("serializable");
        assert_eq!(Tuning::from_json(&json).expect("parses"), Tuning::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/nonexistent/coin-hop/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_derived_lines() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ground_y(), 350.0);
        assert_eq!(tuning.anchor_y(), 300.0);
        assert_eq!(tuning.max_player_x(), 750.0);
        assert_eq!(tuning.coins_for_level(3), 20);
    }
}
