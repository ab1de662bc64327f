//! ASCII renderer for terminals and logs
//!
//! Downsamples the playfield onto a character grid. Good enough to watch a
//! headless run; not meant to be pretty.

use std::fmt::Write;

use glam::Vec2;

use super::Renderer;
use super::hud::{Hud, Overlay};
use super::sprites::frame_sprites;
use crate::sim::{Rect, Session};

const EMPTY: char = ' ';
const GROUND: char = '=';
const COIN: char = 'o';
const POWER_UP: char = '@';

/// Renders the session into a text frame
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    frame: String,
}

impl TextRenderer {
    /// Grid of `cols` x `rows` cells (at least 1x1) for the playfield
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            frame: String::new(),
        }
    }

    /// The last rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn cell(&self, pos: Vec2, playfield: Vec2) -> (usize, usize) {
        let col = (pos.x / playfield.x * self.cols as f32).floor();
        let row = (pos.y / playfield.y * self.rows as f32).floor();
        (
            (col.max(0.0) as usize).min(self.cols - 1),
            (row.max(0.0) as usize).min(self.rows - 1),
        )
    }

    fn fill(&self, grid: &mut [Vec<char>], rect: &Rect, playfield: Vec2, ch: char) {
        let (c0, r0) = self.cell(rect.pos, playfield);
        // Step just inside the far edge so exact boundaries stay in their cell
        let far = rect.pos + rect.size - Vec2::splat(0.01);
        let (c1, r1) = self.cell(far.max(rect.pos), playfield);
        for row in grid.iter_mut().take(r1 + 1).skip(r0) {
            for cell in row.iter_mut().take(c1 + 1).skip(c0) {
                *cell = ch;
            }
        }
    }

    fn draw_playfield(&self, session: &Session, out: &mut String) {
        let playfield = Vec2::new(session.tuning.playfield_width, session.tuning.playfield_height);
        let mut grid = vec![vec![EMPTY; self.cols]; self.rows];

        let player_initial = session
            .character()
            .name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('P');

        // Player is always the last sprite
        let sprites = frame_sprites(session);
        if let Some((player, coins)) = sprites.split_last() {
            for coin in coins {
                let ch = if coin.is_power_up { POWER_UP } else { COIN };
                let (col, row) = self.cell(coin.rect.center(), playfield);
                grid[row][col] = ch;
            }
            self.fill(&mut grid, &player.rect, playfield, player_initial);
        }

        let hud = Hud::from_session(session);
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            hud.score_text(),
            hud.character,
            hud.level_text(),
            hud.timer_text()
        );
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
    }

    fn draw_overlay(&self, overlay: &Overlay, out: &mut String) {
        let lines = overlay.lines();
        let top = self.rows.saturating_sub(lines.len()) / 2;

        for _ in 0..top {
            out.push('\n');
        }
        for line in &lines {
            let pad = self.cols.saturating_sub(line.len()) / 2;
            let _ = writeln!(out, "{:pad$}{}", "", line, pad = pad);
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, session: &Session) {
        let mut out = String::with_capacity((self.cols + 1) * (self.rows + 2));

        match Overlay::from_session(session) {
            Some(overlay) => self.draw_overlay(&overlay, &mut out),
            None => self.draw_playfield(session, &mut out),
        }
        out.extend(std::iter::repeat_n(GROUND, self.cols));
        out.push('\n');

        self.frame = out;
    }
}
