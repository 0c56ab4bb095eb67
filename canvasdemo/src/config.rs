use crate::Error;

use canvasdemo_graphics::ball::Ball;
use canvasdemo_sim::models::LinearParams;
use serde::Deserialize;

/// drawing area, fixed at startup
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    /// unit: pixels
    #[serde(default = "Viewport::default_width")]
    pub width: i32,
    /// unit: pixels
    #[serde(default = "Viewport::default_height")]
    pub height: i32,
}

impl Viewport {
    fn default_width() -> i32 {
        1280
    }

    fn default_height() -> i32 {
        720
    }

    pub fn to_viewport(&self) -> canvasdemo_graphics::Viewport {
        canvasdemo_graphics::Viewport::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

/// where and how often frames get written
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Output {
    /// frames are only written if this is set, relative to the config file
    #[serde(default)]
    pub directory: Option<std::path::PathBuf>,
    /// write every n-th tick
    #[serde(default = "Output::default_frame_every")]
    pub frame_every: u64,
    /// pace ticks with the wall clock
    #[serde(default = "Output::default_realtime")]
    pub realtime: bool,
    /// stop after this many ticks, runs forever if unset
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

impl Output {
    fn default_frame_every() -> u64 {
        33
    }

    fn default_realtime() -> bool {
        true
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            directory: None,
            frame_every: Self::default_frame_every(),
            realtime: Self::default_realtime(),
            max_ticks: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Log {
    /// overridden by RUST_LOG
    #[serde(default = "Log::default_level")]
    pub level: log::LevelFilter,
}

impl Log {
    fn default_level() -> log::LevelFilter {
        log::LevelFilter::Info
    }
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

/// global configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub animation: LinearParams,
    #[serde(default)]
    pub ball: Ball,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub log: Log,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.viewport.width <= 0 || self.viewport.height <= 0 {
            return Err(Error::InvalidConfig("viewport size must be positive"));
        }
        if self.output.frame_every == 0 {
            return Err(Error::InvalidConfig("frame_every must not be 0"));
        }
        let velocity_x = self.animation.velocity_x;
        if !velocity_x.is_finite() || velocity_x <= 0.0 {
            return Err(Error::InvalidConfig("velocity_x must be positive"));
        }
        self.animation.interval()?;

        Ok(())
    }
}

/// parse and validate a config, relative paths stay untouched
pub fn parse(s: &str) -> Result<Config, Error> {
    let cfg: Config = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// load config file
pub fn load<P: AsRef<std::path::Path>>(filename: P) -> Result<Config, Error> {
    let buffer = std::fs::read_to_string(filename.as_ref())?;
    let mut cfg = parse(&buffer)?;

    // make all paths absolute
    if let (Some(cfgdir), Some(dir)) = (filename.as_ref().parent(), &cfg.output.directory) {
        cfg.output.directory = Some(cfgdir.join(dir));
    }

    Ok(cfg)
}
