pub trait Model {
    type State;

    fn step(&mut self, x: &mut Self::State);
    fn set_dt(&mut self, dt: f64);
    fn dt(&self) -> f64;
}

mod error;
pub use error::Error;

pub mod models;
pub mod run;

pub use run::Animation;
pub use run::AnimationState;
pub use run::Ticker;
