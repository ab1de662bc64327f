//! Sprite list for a frame
//!
//! Backend-neutral draw commands: which image goes where, how transparent,
//! and whether it is mirrored.

use crate::platform::ImageHandle;
use crate::sim::{Key, Rect, Session};

/// Blink speed of the power-up coin (radians per frame)
pub const POWER_UP_BLINK_RATE: f32 = 0.008;

/// One image to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub image: ImageHandle,
    pub rect: Rect,
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
    /// Mirror horizontally
    pub flip_x: bool,
    /// Drawn from the power-up coin
    pub is_power_up: bool,
}

/// Power-up coin opacity, oscillating between 0 and 1
#[inline]
pub fn power_up_opacity(frame: u64) -> f32 {
    ((frame as f32 * POWER_UP_BLINK_RATE).sin() + 1.0) / 2.0
}

/// Draw list for the playfield, back to front. Empty on the end-of-round
/// screen, which only shows the overlay.
pub fn frame_sprites(session: &Session) -> Vec<Sprite> {
    if session.phase.is_round_over() {
        return Vec::new();
    }

    let coin_image = session.coin_image();
    let mut sprites: Vec<Sprite> = session
        .coins
        .iter()
        .filter(|c| !c.collected)
        .map(|coin| Sprite {
            image: coin_image,
            rect: coin.rect(),
            opacity: if coin.is_power_up {
                power_up_opacity(session.frame)
            } else {
                1.0
            },
            flip_x: false,
            is_power_up: coin.is_power_up,
        })
        .collect();

    // Character faces left while the left key is held
    sprites.push(Sprite {
        image: session.character().image,
        rect: session.player.rect(),
        opacity: 1.0,
        flip_x: session.keys.is_down(Key::Left),
        is_power_up: false,
    });

    sprites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_opacity_range() {
        assert!((power_up_opacity(0) - 0.5).abs() < 1e-6);
        for frame in (0..5_000).step_by(37) {
            let o = power_up_opacity(frame);
            assert!((0.0..=1.0).contains(&o));
        }
    }

    #[test]
    fn test_sprites_skip_collected_coins() {
        let mut session = Session::with_seed(1);
        session.coins[0].collected = true;
        session.coins[3].collected = true;

        let sprites = frame_sprites(&session);
        // 8 coins left + the player, player drawn last
        assert_eq!(sprites.len(), 9);
        let player = sprites.last().expect("player sprite");
        assert_eq!(player.image, session.character().image);
        assert_eq!(player.rect, session.player.rect());
    }

    #[test]
    fn test_power_up_sprite_is_flagged() {
        let session = Session::with_seed(4);
        let sprites = frame_sprites(&session);
        let (player, coins) = sprites.split_last().expect("player sprite");

        assert!(!player.is_power_up);
        assert_eq!(coins.iter().filter(|s| s.is_power_up).count(), 1);
        for (sprite, coin) in coins.iter().zip(&session.coins) {
            assert_eq!(sprite.is_power_up, coin.is_power_up);
        }
    }

    #[test]
    fn test_player_faces_left_while_left_held() {
        let mut session = Session::with_seed(2);
        assert!(!frame_sprites(&session).last().expect("player").flip_x);
        session.key_down(Key::Left);
        assert!(frame_sprites(&session).last().expect("player").flip_x);
    }

    #[test]
    fn test_round_over_draws_no_sprites() {
        let mut session = Session::with_seed(3);
        session.phase = GamePhase::GameOver;
        assert!(frame_sprites(&session).is_empty());
    }
}
