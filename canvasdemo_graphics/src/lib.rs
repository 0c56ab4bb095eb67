pub mod utils;

mod error;
pub use error::Error;

mod color;
pub use color::Color;

pub mod surface;
pub use surface::CairoSurface;
pub use surface::Surface;

pub mod recorder;
pub use recorder::Command;
pub use recorder::Recorder;

pub mod arrow;
pub mod ball;

/// size of the drawing area in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// create an image surface matching this viewport
    pub fn create_surface(&self) -> Result<cairo::ImageSurface, Error> {
        Ok(cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.width,
            self.height,
        )?)
    }
}
