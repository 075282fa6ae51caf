//! JSON configuration for a [`ColorNamer`].
//!
//! Every field is optional and falls back to the built-in behaviour:
//!
//! ```json
//! {
//!     "saturation_threshold": 0.2,
//!     "grayscale": {
//!         "bounds": [0.2, 0.4, 0.6, 0.8],
//!         "names": ["Black", "Dark Gray", "Medium Gray", "Light Gray", "White"]
//!     },
//!     "palette": [
//!         { "name": "Red", "color": "#FF0000" },
//!         { "name": "Teal", "color": [0.0, 0.5, 0.5] }
//!     ],
//!     "sample_every": 3
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    color::Component,
    error::{Error, Result},
    grayscale::{GrayscaleGate, DEFAULT_BOUNDS, DEFAULT_NAMES},
    models::Srgb,
    namer::{ColorNamer, DEFAULT_SATURATION_THRESHOLD},
    palette::Palette,
    sample::{Throttle, DEFAULT_SAMPLE_EVERY},
};

/// Settings for building a [`ColorNamer`] and the tick cadence around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamerConfig {
    /// Samples below this HSV saturation are named by brightness.
    pub saturation_threshold: Component,
    /// Bands for achromatic samples.
    pub grayscale: GrayscaleConfig,
    /// Replacement palette. The built-in palette is used when absent.
    pub palette: Option<Vec<PaletteEntry>>,
    /// Name a sample on every this many ticks.
    pub sample_every: u32,
}

/// Bands for achromatic samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayscaleConfig {
    /// Ascending, inclusive upper bounds of the four darkest bands.
    pub bounds: [Component; 4],
    /// Band names from darkest to brightest.
    pub names: [String; 5],
}

/// One named reference color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// The name reported for matches.
    pub name: String,
    /// The reference color.
    pub color: ColorSpec,
}

/// A color written either as `"#RRGGBB"` or as `[r, g, b]` in 0..1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex notation, the leading `#` is optional.
    Hex(String),
    /// Gamma encoded channels.
    Channels([Component; 3]),
}

impl ColorSpec {
    /// Resolve to an sRGB color.
    pub fn to_srgb(&self) -> Result<Srgb> {
        match self {
            ColorSpec::Hex(hex) => parse_hex(hex),
            ColorSpec::Channels([red, green, blue]) => Ok(Srgb::new(*red, *green, *blue)),
        }
    }
}

fn parse_hex(text: &str) -> Result<Srgb> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(text.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidHex(text.to_string()))
    };

    Ok(Srgb::from_rgb8([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            saturation_threshold: DEFAULT_SATURATION_THRESHOLD,
            grayscale: GrayscaleConfig::default(),
            palette: None,
            sample_every: DEFAULT_SAMPLE_EVERY,
        }
    }
}

impl Default for GrayscaleConfig {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS,
            names: DEFAULT_NAMES.map(String::from),
        }
    }
}

impl NamerConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            palette_len = config.palette.as_ref().map(Vec::len),
            "loaded namer config"
        );
        Ok(config)
    }

    /// Validate the settings and build a namer from them.
    pub fn build(&self) -> Result<ColorNamer> {
        let palette = match &self.palette {
            Some(entries) => {
                let colors = entries
                    .iter()
                    .map(|entry| Ok((entry.name.clone(), entry.color.to_srgb()?)))
                    .collect::<Result<Vec<_>>>()?;
                Palette::new(colors)?
            }
            None => Palette::default(),
        };

        let gate = GrayscaleGate::new(self.grayscale.bounds, self.grayscale.names.clone())?;

        ColorNamer::new(palette, gate, self.saturation_threshold)
    }

    /// The tick cadence described by `sample_every`.
    pub fn throttle(&self) -> Throttle {
        Throttle::new(self.sample_every)
    }
}
