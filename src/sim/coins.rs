//! Coin layout for a level
//!
//! Heights are measured up from the anchor line. Ordinary coins use the full
//! jump height band (reachable with a double jump), the power-up stays low
//! enough for a single jump.

use glam::Vec2;
use rand::Rng;

use super::state::Coin;
use crate::tuning::Tuning;

/// Height band (above the anchor line) a coin may be placed in
pub fn coin_band(tuning: &Tuning, power_up: bool) -> f32 {
    let max = tuning.max_jump_height();
    if power_up {
        max * tuning.power_up_band
    } else {
        max
    }
}

/// Lay out `count` coins, exactly one of them the power-up
pub fn generate_coins<R: Rng>(rng: &mut R, tuning: &Tuning, count: u32) -> Vec<Coin> {
    if count == 0 {
        return Vec::new();
    }

    let power_up_index = rng.random_range(0..count);
    let anchor = tuning.anchor_y();
    let clearance = tuning.coin_min_clearance;

    (0..count)
        .map(|i| {
            let is_power_up = i == power_up_index;
            let side = if is_power_up {
                tuning.coin_size * tuning.power_up_scale
            } else {
                tuning.coin_size
            };

            let span_x = (tuning.playfield_width - side).max(0.0);
            let x = rng.random::<f32>() * span_x;

            let spread = (coin_band(tuning, is_power_up) - clearance).max(0.0);
            let y = anchor - clearance - rng.random::<f32>() * spread;

            Coin {
                pos: Vec2::new(x, y),
                size: Vec2::splat(side),
                collected: false,
                is_power_up,
            }
        })
        .collect()
}
