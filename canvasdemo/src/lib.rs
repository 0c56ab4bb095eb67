pub mod app;
pub mod config;
mod error;
pub mod frames;
pub mod logger;

pub use config::Config;
pub use error::*;
