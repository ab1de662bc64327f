//! Rendering module
//!
//! Renderers only read the session. `hud` and `sprites` turn session state
//! into backend-neutral draw data; `text` is a terminal backend built on them.

pub mod hud;
pub mod sprites;
pub mod text;

pub use hud::{Hud, Overlay, RestartPrompt};
pub use sprites::Sprite;
pub use text::TextRenderer;

use crate::sim::Session;

/// Draws a frame of the session. Must not feed anything back into it.
pub trait Renderer {
    fn render(&mut self, session: &Session);
}
