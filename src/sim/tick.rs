//! Per-frame simulation step
//!
//! Core game loop that advances the session by one display frame.
//! Timers use the measured delta; movement and gravity are applied once per
//! frame regardless of the delta.

use super::coins::generate_coins;
use super::input::Key;
use super::state::{GameEvent, GamePhase, Player, Session, character_index_for_level};

/// Advance the session by one frame of `dt_ms` milliseconds
pub fn tick(session: &mut Session, dt_ms: f64) {
    let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
    session.frame += 1;

    match session.phase {
        GamePhase::Playing => {
            session.game_timer_ms = (session.game_timer_ms - dt).max(0.0);
            if session.game_timer_ms <= 0.0 {
                end_round(session, GamePhase::GameOver);
                return;
            }

            move_player(session);
            collect_coins(session);
        }

        GamePhase::Win | GamePhase::GameOver => {
            session.post_round_ms += dt;
            // Level-triggered: a jump key held through the wait restarts at once
            if session.restart_ready() && session.keys.is_down(Key::Jump) {
                restart(session);
            }
        }
    }
}

/// Reset the session onto `level` (1-based) with a fresh player and coins
pub fn start_level(session: &mut Session, level: u32) {
    let level = level.max(1);

    session.level = level;
    session.total_coins = session.tuning.coins_for_level(level);
    session.character_index = character_index_for_level(level);
    session.game_timer_ms = session.tuning.game_duration_ms;
    session.post_round_ms = 0.0;
    session.player = Player::new(&session.tuning);
    session.coins = generate_coins(&mut session.rng, &session.tuning, session.total_coins);
    session.phase = GamePhase::Playing;

    log::info!(
        "Level {}: {} coins, playing as {}",
        level,
        session.total_coins,
        session.character().name
    );
    session.events.push(GameEvent::LevelStarted {
        level,
        total_coins: session.total_coins,
    });
}

/// Leave the end-of-round screen: next level after a win, level 1 otherwise
fn restart(session: &mut Session) {
    match session.phase {
        GamePhase::Win => start_level(session, session.level + 1),
        GamePhase::GameOver => start_level(session, 1),
        GamePhase::Playing => {}
    }
}

fn end_round(session: &mut Session, phase: GamePhase) {
    session.phase = phase;
    session.post_round_ms = 0.0;

    let level = session.level;
    let score = session.player.score;
    let event = match phase {
        GamePhase::Win => {
            log::info!("Level {} complete, score {}", level, score);
            GameEvent::LevelComplete { level, score }
        }
        _ => {
            log::info!("Time up on level {}, score {}", level, score);
            GameEvent::TimeUp { level, score }
        }
    };
    session.events.push(event);
}

fn move_player(session: &mut Session) {
    let speed = session.character().speed;
    let keys = session.keys;
    // A playfield narrower than the player pins it to the left edge
    let max_x = session.tuning.max_player_x().max(0.0);
    let ground_y = session.tuning.ground_y();
    let player = &mut session.player;

    if keys.is_down(Key::Left) && player.pos.x > 0.0 {
        player.pos.x -= speed;
    }
    if keys.is_down(Key::Right) && player.pos.x < max_x {
        player.pos.x += speed;
    }
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    let airborne = player.pos.y < ground_y;
    player.apply_gravity();

    if player.pos.y > ground_y {
        player.land(ground_y);
        if airborne {
            session.events.push(GameEvent::Landed);
        }
    }
}

fn collect_coins(session: &mut Session) {
    let player_rect = session.player.rect();
    let mut collected_any = false;

    for (index, coin) in session.coins.iter_mut().enumerate() {
        if coin.collected || !player_rect.overlaps(&coin.rect()) {
            continue;
        }

        coin.collected = true;
        if coin.is_power_up {
            session.player.has_double_jump = true;
        }
        session.player.score += 1;
        collected_any = true;

        log::debug!(
            "Coin {} collected (power-up: {}), score {}",
            index,
            coin.is_power_up,
            session.player.score
        );
        session.events.push(GameEvent::CoinCollected {
            index,
            power_up: coin.is_power_up,
        });
    }

    if collected_any && session.coins.iter().all(|c| c.collected) {
        end_round(session, GamePhase::Win);
    }
}
