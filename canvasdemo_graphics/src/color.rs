use crate::Error;

/// packed RGBA color, `0xRRGGBBAA`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xffffffff);
    pub const BLACK: Self = Self(0x000000ff);

    pub fn r(&self) -> f64 {
        f64::from((self.0 >> 24) & 0xff) / 255.0
    }

    pub fn g(&self) -> f64 {
        f64::from((self.0 >> 16) & 0xff) / 255.0
    }

    pub fn b(&self) -> f64 {
        f64::from((self.0 >> 8) & 0xff) / 255.0
    }

    pub fn a(&self) -> f64 {
        f64::from(self.0 & 0xff) / 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Self(rgba)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    /// accepts `white`, `black`, `#rrggbb` and `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;

        match hex.len() {
            6 => Ok(Self((value << 8) | 0xff)),
            8 => Ok(Self(value)),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u32),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(Self(v)),
            Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
