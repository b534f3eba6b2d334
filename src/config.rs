//! Tunables of the hero animation.
//!
//! Every field has the value the hero section ships with as its default, and
//! can be overridden before the animation is constructed. Once an
//! [`Animator`](crate::Animator) owns a config it is never changed again.

use crate::color::{parse_palette, Rgba, DEFAULT_BACKGROUND, DEFAULT_OUTLINE, DEFAULT_PALETTE};
use crate::error::ConfigError;

/// Sinusoidal motion shared by every vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sway {
    /// Radians per unit of animation time (the frame clock runs in milliseconds)
    pub speed: f64,
    /// Peak displacement per axis, in pixels
    pub amplitude: f64,
}

impl Default for Sway {
    fn default() -> Self {
        Self {
            speed: 0.0003,
            amplitude: 20.0,
        }
    }
}

/// Mesh, motion and color settings.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    /// Grid spacing in pixels; each quad of the grid becomes two triangles
    pub cell_size: f64,

    /// Radians per millisecond of the vertex sway
    pub angular_speed: f64,

    /// Sway radius per axis in pixels
    pub sway_amplitude: f64,

    /// Total jitter span as a fraction of `cell_size`, centered on the grid point
    pub jitter_fraction: f64,

    /// Fill colors, sampled uniformly per triangle
    pub palette: Vec<Rgba>,

    /// Painted under the mesh every frame
    pub background: Rgba,

    /// Stroke drawn along every triangle edge
    pub outline: Rgba,

    /// Fixed seed for reproducible meshes; `None` lets the host pick one
    pub seed: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        let sway = Sway::default();
        Self {
            cell_size: 120.0,
            angular_speed: sway.speed,
            sway_amplitude: sway.amplitude,
            jitter_fraction: 0.4,
            palette: DEFAULT_PALETTE.to_vec(),
            background: DEFAULT_BACKGROUND,
            outline: DEFAULT_OUTLINE,
            seed: None,
        }
    }
}

impl HeroConfig {
    /// Keys accepted by [`HeroConfig::apply_override`].
    pub const KEYS: [&'static str; 8] = [
        "cell-size",
        "speed",
        "amplitude",
        "jitter",
        "palette",
        "background",
        "outline",
        "seed",
    ];

    /// Smallest accepted `cell_size`, in pixels.
    pub const MIN_CELL_SIZE: f64 = 1.0;

    pub fn sway(&self) -> Sway {
        Sway {
            speed: self.angular_speed,
            amplitude: self.sway_amplitude,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size >= Self::MIN_CELL_SIZE) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !self.angular_speed.is_finite() {
            return Err(ConfigError::InvalidSpeed(self.angular_speed));
        }
        if !(self.sway_amplitude.is_finite() && self.sway_amplitude >= 0.0) {
            return Err(ConfigError::InvalidAmplitude(self.sway_amplitude));
        }
        if !(0.0..=1.0).contains(&self.jitter_fraction) {
            return Err(ConfigError::InvalidJitter(self.jitter_fraction));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Applies one string setting, as found in the canvas element's
    /// `data-*` attributes. Range checks are left to [`HeroConfig::validate`].
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "cell-size" => self.cell_size = parse_number(key, value)?,
            "speed" => self.angular_speed = parse_number(key, value)?,
            "amplitude" => self.sway_amplitude = parse_number(key, value)?,
            "jitter" => self.jitter_fraction = parse_number(key, value)?,
            "palette" => self.palette = parse_palette(value)?,
            "background" => self.background = value.parse()?,
            "outline" => self.outline = value.parse()?,
            "seed" => {
                let seed = value.parse().map_err(|_| ConfigError::InvalidNumber {
                    key: key.to_owned(),
                    value: value.to_owned(),
                })?;
                self.seed = Some(seed);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_owned())),
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}
