#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    CairoBorrow(#[from] cairo::BorrowError),
    #[error(transparent)]
    CairoIo(#[from] cairo::IoError),

    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("pixel out of bounds: {0},{1}")]
    OutOfBounds(i32, i32),
}
