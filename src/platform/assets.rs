//! Asset handles
//!
//! The simulation never looks inside an image; it only carries the handle
//! so the renderer can draw the right sprite.

use serde::{Deserialize, Serialize};

/// Opaque reference to an image owned by the asset provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(pub u32);

/// Supplies image handles by asset name
pub trait AssetProvider {
    fn image(&self, name: &str) -> ImageHandle;
}

/// Names of the sprites the game asks for
pub mod names {
    pub const HORSE: &str = "horse";
    pub const TURTLE: &str = "turtle";
    pub const CAT: &str = "cat";
    pub const COIN: &str = "coin";
}

/// Fixed name table, used when nothing is actually loaded
#[derive(Debug, Clone, Default)]
pub struct StaticAssets;

impl AssetProvider for StaticAssets {
    fn image(&self, name: &str) -> ImageHandle {
        let id = match name {
            names::HORSE => 1,
            names::TURTLE => 2,
            names::CAT => 3,
            names::COIN => 4,
            other => {
                log::warn!("Unknown asset '{}'", other);
                0
            }
        };
        ImageHandle(id)
    }
}
