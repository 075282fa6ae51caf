//! chromaname turns a single RGB sample into a human readable color name.
//!
//! Samples with little saturation are named by brightness ("Black" through
//! "White"). Everything else is pushed to full saturation and matched against
//! a small palette of named hues by CIE-Lab distance.
//!
//! ```rust
//! use chromaname::{name_color, models::Srgb};
//!
//! assert_eq!(name_color(&Srgb::new(0.9, 0.1, 0.1)).unwrap(), "Red");
//! assert_eq!(name_color(&Srgb::new(0.1, 0.1, 0.1)).unwrap(), "Black");
//! ```

#![deny(missing_docs)]

mod color;
pub mod config;
mod convert;
mod error;
mod grayscale;
mod interpolate;
mod math;
pub mod models;
mod namer;
mod palette;
mod sample;


pub use color::{Component, Components};
pub use config::NamerConfig;
pub use error::{Error, Result};
pub use grayscale::{classify_achromatic, GrayscaleGate, DEFAULT_BOUNDS, DEFAULT_NAMES};
pub use namer::{name_color, ColorNamer, Reading, DEFAULT_SATURATION_THRESHOLD};
pub use palette::{classify, Match, NamedColor, Palette, DEFAULT_COLORS};
pub use sample::{average, Driver, Sampler, Throttle, DEFAULT_SAMPLE_EVERY};
