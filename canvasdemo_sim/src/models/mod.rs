pub mod linear;
pub use linear::Linear;
pub use linear::Params as LinearParams;
