//! HUD and end-of-round overlay text

use crate::sim::{GamePhase, Session};

/// Heads-up display shown while playing
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub character: String,
    pub level: u32,
    /// Whole seconds left, rounded up
    pub seconds_left: u64,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        Self {
            score: session.player.score,
            character: session.character().name.clone(),
            level: session.level,
            seconds_left: ceil_seconds(session.game_timer_ms),
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn level_text(&self) -> String {
        format!("Level: {}", self.level)
    }

    pub fn timer_text(&self) -> String {
        format!("Time: {}s", self.seconds_left)
    }
}

/// What the end-of-round screen tells the player to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPrompt {
    /// Still counting down; whole seconds until restart is accepted
    Wait(u64),
    Ready,
}

/// End-of-round overlay (Win or GameOver)
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub title: String,
    pub final_score: u32,
    /// `(next level, coins on it)`, only after a win
    pub next_level: Option<(u32, u32)>,
    pub prompt: RestartPrompt,
}

impl Overlay {
    /// `None` while playing
    pub fn from_session(session: &Session) -> Option<Self> {
        let title = match session.phase {
            GamePhase::Playing => return None,
            GamePhase::Win => format!("Level {} Complete!", session.level),
            GamePhase::GameOver => "Game Over!".to_string(),
        };

        let next_level = (session.phase == GamePhase::Win).then(|| {
            let next = session.level + 1;
            (next, session.tuning.coins_for_level(next))
        });

        let prompt = if session.restart_ready() {
            RestartPrompt::Ready
        } else {
            RestartPrompt::Wait(ceil_seconds(
                session.tuning.post_round_ms - session.post_round_ms,
            ))
        };

        Some(Self {
            title,
            final_score: session.player.score,
            next_level,
            prompt,
        })
    }

    /// Overlay text, top to bottom
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.title.clone(),
            format!("Final Score: {}", self.final_score),
        ];
        if let Some((level, coins)) = self.next_level {
            lines.push(format!("Next Level: {}", level));
            lines.push(format!("Coins to collect: {}", coins));
        }
        lines.push(match self.prompt {
            RestartPrompt::Ready => "Press SPACE to play again".to_string(),
            RestartPrompt::Wait(secs) => format!("New game in {}...", secs),
        });
        lines
    }
}

fn ceil_seconds(ms: f64) -> u64 {
    (ms.max(0.0) / 1000.0).ceil() as u64
}
