//! Errors from the parts of the renderer that touch the outside world.
//!
//! Tracing itself never fails; only settings loading and image output do.

use thiserror::Error;

/// Errors that can occur while loading settings or writing images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Pixel buffer does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;
