//! Game state and core simulation types
//!
//! A [`Session`] owns everything that changes while the game runs. Frame
//! timing goes through its [`SimClock`]; key events go through
//! [`Session::key_down`] / [`Session::key_up`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::SimClock;
use super::collision::Rect;
use super::input::{HeldKeys, Key};
use crate::platform::assets::{AssetProvider, ImageHandle, StaticAssets, names};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, countdown running
    Playing,
    /// Every coin collected; showing the level-complete screen
    Win,
    /// Countdown ran out
    GameOver,
}

impl GamePhase {
    /// True on either end-of-round screen
    pub fn is_round_over(self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::GameOver)
    }
}

/// Something the frame driver may want to react to (sounds, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: u32, total_coins: u32 },
    Jumped { double: bool },
    Landed,
    CoinCollected { index: usize, power_up: bool },
    LevelComplete { level: u32, score: u32 },
    TimeUp { level: u32, score: u32 },
}

/// The player-controlled character's physical state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (per frame, positive = down)
    pub vel_y: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub is_jumping: bool,
    /// Jumps left before touching the ground again (0..=2)
    pub jumps_remaining: u8,
    /// Double-jump power-up; cleared only when the player is recreated
    pub has_double_jump: bool,
    pub score: u32,
}

impl Player {
    /// Fresh player at the spawn point
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.anchor_y()),
            size: Vec2::splat(tuning.player_size),
            vel_y: 0.0,
            jump_force: tuning.jump_force,
            gravity: tuning.gravity,
            is_jumping: false,
            jumps_remaining: 1,
            has_double_jump: false,
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Jumps granted on landing
    #[inline]
    pub fn jump_allowance(&self) -> u8 {
        if self.has_double_jump { 2 } else { 1 }
    }

    /// Jump if any jumps are left. Returns whether the jump happened.
    pub fn try_jump(&mut self) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }
        self.vel_y = self.jump_force;
        self.is_jumping = true;
        self.jumps_remaining -= 1;
        true
    }

    /// One frame of gravity (not scaled by dt)
    pub fn apply_gravity(&mut self) {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
    }

    /// Snap to the ground line and refill jumps
    pub fn land(&mut self, ground_y: f32) {
        self.pos.y = ground_y;
        self.vel_y = 0.0;
        self.is_jumping = false;
        self.jumps_remaining = self.jump_allowance();
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    /// Grants double jump; exactly one per level
    pub is_power_up: bool,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Number of playable characters
pub const ROSTER_SIZE: usize = 3;

/// A playable character (sprite + horizontal speed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub image: ImageHandle,
    pub name: String,
    /// Pixels moved per frame while a direction key is held
    pub speed: f32,
}

impl Character {
    /// The fixed roster, in level order
    pub fn roster(assets: &dyn AssetProvider) -> [Character; ROSTER_SIZE] {
        let make = |asset: &str, name: &str, speed: f32| Character {
            image: assets.image(asset),
            name: name.to_string(),
            speed,
        };
        [
            make(names::HORSE, "Horse", 5.0),
            make(names::TURTLE, "Turtle", 4.0),
            make(names::CAT, "Cat", 6.0),
        ]
    }
}

/// Roster slot used on a 1-based level
#[inline]
pub fn character_index_for_level(level: u32) -> usize {
    (level.saturating_sub(1) as usize) % ROSTER_SIZE
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    /// Coins laid out this level
    pub total_coins: u32,
    /// Countdown (ms), never negative
    pub game_timer_ms: f64,
    /// Time spent on the end-of-round screen (ms)
    pub post_round_ms: f64,
    /// Frames seen since the session was created (drives cosmetic blinking)
    pub frame: u64,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub keys: HeldKeys,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) roster: [Character; ROSTER_SIZE],
    pub(crate) character_index: usize,
    pub(crate) coin_image: ImageHandle,
    pub(crate) clock: SimClock,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Start a session on level 1
    pub fn new(seed: u64, tuning: Tuning, assets: &dyn AssetProvider) -> Self {
        let tuning = tuning.sanitized();
        let player = Player::new(&tuning);
        let mut session = Self {
            phase: GamePhase::Playing,
            level: 1,
            total_coins: tuning.coins_for_level(1),
            game_timer_ms: tuning.game_duration_ms,
            post_round_ms: 0.0,
            frame: 0,
            player,
            coins: Vec::new(),
            keys: HeldKeys::default(),
            seed,
            roster: Character::roster(assets),
            character_index: 0,
            coin_image: assets.image(names::COIN),
            clock: SimClock::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            tuning,
        };

        super::tick::start_level(&mut session, 1);

        session
    }

    /// Default tuning and the built-in asset table
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tuning::default(), &StaticAssets)
    }

    /// Advance one frame using a timestamp from the frame driver
    pub fn update(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);
        let phase_before = self.phase;
        self.advance(dt);
        // Entering Win or a new level restarts timing from this frame
        if self.phase != phase_before && self.phase != GamePhase::GameOver {
            self.clock.rebase(now_ms);
        }
    }

    /// Advance one frame by an already measured delta (ms)
    pub fn advance(&mut self, dt_ms: f64) {
        super::tick::tick(self, dt_ms);
    }

    /// Key pressed. A fresh jump press tries to jump right away.
    pub fn key_down(&mut self, key: Key) {
        let edge = self.keys.press(key);
        if key != Key::Jump || !edge || self.phase != GamePhase::Playing {
            return;
        }

        let airborne = self.player.is_jumping;
        if self.player.try_jump() {
            self.events.push(GameEvent::Jumped { double: airborne });
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Drop every held key, e.g. when the input source loses focus and
    /// key-up events will never arrive
    pub fn release_all_keys(&mut self) {
        self.keys.clear();
    }

    pub fn character(&self) -> &Character {
        &self.roster[self.character_index]
    }

    pub fn character_index(&self) -> usize {
        self.character_index
    }

    pub fn roster(&self) -> &[Character; ROSTER_SIZE] {
        &self.roster
    }

    pub fn coin_image(&self) -> ImageHandle {
        self.coin_image
    }

    pub fn coins_collected(&self) -> usize {
        self.coins.iter().filter(|c| c.collected).count()
    }

    /// End-of-round screen has been shown long enough to accept a restart
    pub fn restart_ready(&self) -> bool {
        self.phase.is_round_over() && self.post_round_ms >= self.tuning.post_round_ms
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
