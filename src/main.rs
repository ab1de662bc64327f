//! Coin Hop entry point
//!
//! Headless frame driver: runs a session with a simple autopilot pressing the
//! keys, and prints ASCII frames. Set `RUST_LOG=info` to see level events.
//! Run with `--help` for options.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use coin_hop::platform::{ManualTime, MonotonicTime, StaticAssets, TimeSource, key_from_code};
use coin_hop::renderer::{Renderer, TextRenderer};
use coin_hop::sim::{Coin, GameEvent, Session};
use coin_hop::{GamePhase, Tuning};

/// Nominal display refresh (60 Hz)
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Runs a Coin Hop session headlessly with an autopilot at the keys
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Seed for the coin layout
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
    /// Number of frames to simulate
    #[arg(long, value_name = "COUNT", default_value_t = 60 * 120)]
    frames: u64,
    /// Print an ASCII frame every COUNT frames
    #[arg(
        long = "render-every",
        value_name = "COUNT",
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    render_every: u64,
    /// JSON file overriding game balance
    #[arg(long, value_name = "FILE")]
    tuning: Option<PathBuf>,
    /// Pace frames against the wall clock instead of simulating 60 Hz
    #[arg(long)]
    realtime: bool,
}

/// Keyboard stand-in: decides which keys to hold each frame
#[derive(Debug, Default)]
struct Autopilot {
    held: Vec<&'static str>,
}

impl Autopilot {
    /// Key codes that should be down this frame
    fn wanted(&self, session: &Session) -> Vec<&'static str> {
        if session.phase.is_round_over() {
            return if session.restart_ready() { vec!["Space"] } else { Vec::new() };
        }

        let player = session.player.rect();
        let Some(target) = nearest_coin(session) else {
            return Vec::new();
        };
        let target = target.rect();

        let dx = target.center().x - player.center().x;
        let mut keys = Vec::new();
        if dx < -2.0 {
            keys.push("ArrowLeft");
        } else if dx > 2.0 {
            keys.push("ArrowRight");
        }

        let below = dx.abs() < player.size.x * 0.5;
        let grounded = !session.player.is_jumping;
        let falling_short =
            session.player.is_jumping && session.player.vel_y > 0.0 && target.bottom() < player.top();
        if below && (grounded || falling_short) {
            keys.push("Space");
        }

        keys
    }

    /// Send key-up/key-down events for whatever changed
    fn drive(&mut self, session: &mut Session) {
        let wanted = self.wanted(session);

        for code in self.held.iter().filter(|c| !wanted.contains(*c)) {
            if let Some(key) = key_from_code(code) {
                session.key_up(key);
            }
        }
        for code in wanted.iter().filter(|c| !self.held.contains(*c)) {
            if let Some(key) = key_from_code(code) {
                session.key_down(key);
            }
        }

        self.held = wanted;
    }

    /// Let go of everything without sending individual key-ups
    fn release(&mut self, session: &mut Session) {
        session.release_all_keys();
        self.held.clear();
    }
}

fn nearest_coin(session: &Session) -> Option<&Coin> {
    let player = session.player.rect().center();
    session
        .coins
        .iter()
        .filter(|c| !c.collected)
        .min_by(|a, b| {
            let da = (a.rect().center() - player).length_squared();
            let db = (b.rect().center() - player).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Where frame timestamps come from
enum FrameTime {
    /// Simulated 60 Hz, as fast as the CPU allows
    Manual(ManualTime),
    /// Wall clock, sleeping one refresh per frame
    Realtime(MonotonicTime),
}

impl FrameTime {
    fn next_frame(&mut self) -> f64 {
        match self {
            FrameTime::Manual(time) => {
                time.advance(FRAME_MS);
                time.now_ms()
            }
            FrameTime::Realtime(time) => {
                std::thread::sleep(Duration::from_secs_f64(FRAME_MS / 1000.0));
                time.now_ms()
            }
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::CoinCollected { power_up: true, .. } => log::info!("Double jump unlocked!"),
        GameEvent::LevelComplete { level, score } => {
            log::info!("Level {} cleared with {} coins", level, score)
        }
        GameEvent::TimeUp { level, score } => {
            log::info!("Out of time on level {} ({} coins)", level, score)
        }
        other => log::debug!("{:?}", other),
    }
}

fn main() {
    env_logger::init();
    let options = Options::parse();
    log::info!("Coin Hop (headless) starting, seed {:#x}", options.seed);

    let tuning = match &options.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    let mut session = Session::new(options.seed, tuning, &StaticAssets);
    let mut renderer = TextRenderer::new(80, 20);
    let mut autopilot = Autopilot::default();
    let mut time = if options.realtime {
        FrameTime::Realtime(MonotonicTime::new())
    } else {
        FrameTime::Manual(ManualTime::new(0.0))
    };

    let mut best_level = session.level;
    for frame in 0..options.frames {
        autopilot.drive(&mut session);

        session.update(time.next_frame());

        for event in session.drain_events() {
            log_event(&event);
        }
        best_level = best_level.max(session.level);

        if frame % options.render_every == 0 {
            renderer.render(&session);
            println!("{}", renderer.frame());
        }
    }

    autopilot.release(&mut session);
    renderer.render(&session);
    println!("{}", renderer.frame());
    log::info!(
        "Stopped after {} frames on level {} (best level {}, phase {:?})",
        options.frames,
        session.level,
        best_level,
        session.phase
    );
    if session.phase == GamePhase::Playing {
        log::info!(
            "{} of {} coins collected",
            session.coins_collected(),
            session.total_coins
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let options = Options::try_parse_from(["coin-hop"]).expect("defaults parse");
        assert_eq!(options.seed, 0x5eed);
        assert_eq!(options.frames, 7200);
        assert_eq!(options.render_every, 120);
        assert!(options.tuning.is_none());
        assert!(!options.realtime);
    }

    #[test]
    fn test_cli_flags() {
        let options = Options::try_parse_from([
            "coin-hop",
            "--seed",
            "9",
            "--frames",
            "30",
            "--render-every",
            "5",
            "--tuning",
            "balance.json",
            "--realtime",
        ])
        .expect("flags parse");
        assert_eq!(options.seed, 9);
        assert_eq!(options.frames, 30);
        assert_eq!(options.render_every, 5);
        assert_eq!(options.tuning, Some(PathBuf::from("balance.json")));
        assert!(options.realtime);
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Options::try_parse_from(["coin-hop", "--render-every", "0"]).is_err());
        assert!(Options::try_parse_from(["coin-hop", "--frames", "abc"]).is_err());
        assert!(Options::try_parse_from(["coin-hop", "--bogus"]).is_err());
    }
}
