//! Startup errors.

use bevy::image::TextureError;
use thiserror::Error;

/// Fatal startup failures. Nothing after startup can fail.
#[derive(Debug, Error)]
pub enum GophermarkError {
    #[error("failed to decode gopher sprite: {0}")]
    SpriteDecode(#[from] TextureError),

    #[error("gopher sprite has zero width or height")]
    EmptySprite,
}
