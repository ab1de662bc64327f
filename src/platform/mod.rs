//! Platform abstraction layer
//!
//! Contracts for the collaborators around the simulation:
//! - Time source for frame timestamps
//! - Key code mapping for input events
//! - Opaque image handles from the asset provider

pub mod assets;
pub mod input;
pub mod time;

pub use assets::{AssetProvider, ImageHandle, StaticAssets};
pub use input::key_from_code;
pub use time::{ManualTime, MonotonicTime, TimeSource};
