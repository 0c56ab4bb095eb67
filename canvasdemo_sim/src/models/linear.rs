use crate::run::AnimationState;
use crate::Error;

#[derive(Clone, serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// ticks per second
    #[serde(default = "Params::default_fps")]
    pub fps: f64,
    /// unit: pixels per second
    #[serde(default = "Params::default_velocity_x")]
    pub velocity_x: f64,
}

impl Params {
    fn default_fps() -> f64 {
        1000.0
    }

    fn default_velocity_x() -> f64 {
        50.0
    }

    /// unit: seconds
    pub fn dt(&self) -> f64 {
        1.0 / self.fps
    }

    /// time between two ticks
    pub fn interval(&self) -> Result<std::time::Duration, Error> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(Error::InvalidFps(self.fps));
        }

        std::time::Duration::try_from_secs_f64(self.dt())
            .map_err(|_| Error::InvalidFps(self.fps))
    }

    pub fn to_model(&self) -> Linear {
        Linear::new(self.velocity_x, self.dt())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            fps: Self::default_fps(),
            velocity_x: Self::default_velocity_x(),
        }
    }
}

/// constant horizontal velocity
#[derive(Clone, Debug)]
pub struct Linear {
    velocity_x: f64,
    dt: f64,
}

impl Linear {
    pub fn new(velocity_x: f64, dt: f64) -> Self {
        Self { velocity_x, dt }
    }

    pub fn velocity_x(&self) -> f64 {
        self.velocity_x
    }
}

impl crate::Model for Linear {
    type State = AnimationState;

    fn step(&mut self, x: &mut AnimationState) {
        x.position_x += self.velocity_x * self.dt;
    }

    fn set_dt(&mut self, dt: f64) {
        self.dt = dt;
    }

    fn dt(&self) -> f64 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults() {
        let params = Params::default();
        assert_abs_diff_eq!(params.dt(), 0.001);
        assert_eq!(
            params.interval().unwrap(),
            std::time::Duration::from_millis(1)
        );

        let model = params.to_model();
        assert_abs_diff_eq!(model.velocity_x(), 50.0);
        assert_abs_diff_eq!(model.dt(), 0.001);
    }

    #[test]
    fn step() {
        let mut model = Linear::new(50.0, 0.001);
        let mut x = AnimationState::default();

        let mut last = x.position_x;
        for n in 1..=1000 {
            model.step(&mut x);
            assert!(x.position_x > last);
            last = x.position_x;
            testlib::assert_scalar_eq(x.position_x, n as f64 * 0.05);
        }
    }

    #[test]
    fn set_dt() {
        let mut model = Linear::new(10.0, 0.001);
        model.set_dt(0.5);

        let mut x = AnimationState::default();
        model.step(&mut x);
        assert_abs_diff_eq!(x.position_x, 5.0);
    }

    #[test]
    fn invalid_fps() {
        let params: Params = toml::from_str("fps = 0.0").unwrap();
        assert!(params.interval().is_err());

        let params: Params = toml::from_str("fps = -5.0").unwrap();
        assert!(params.interval().is_err());
    }

    #[test]
    fn tiny_fps() {
        // the interval would not fit into a Duration
        let params: Params = toml::from_str("fps = 1e-300").unwrap();
        assert!(matches!(params.interval(), Err(Error::InvalidFps(_))));
    }

    #[test]
    fn deserialize() {
        let params: Params = toml::from_str("velocity_x = 20.0").unwrap();
        assert_abs_diff_eq!(params.fps, 1000.0);
        assert_abs_diff_eq!(params.velocity_x, 20.0);

        assert!(toml::from_str::<Params>("speed = 1.0").is_err());
    }
}
