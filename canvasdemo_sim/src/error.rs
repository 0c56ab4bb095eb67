#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Graphics(#[from] canvasdemo_graphics::Error),

    #[error("invalid fps: {0}")]
    InvalidFps(f64),
}
