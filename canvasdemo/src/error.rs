#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Graphics(#[from] canvasdemo_graphics::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sim(#[from] canvasdemo_sim::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

impl From<cairo::IoError> for Error {
    fn from(e: cairo::IoError) -> Self {
        Self::Graphics(e.into())
    }
}
