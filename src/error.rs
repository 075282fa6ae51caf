//! Error types for chromaname.

use thiserror::Error;

use crate::color::Component;

/// Result type alias for chromaname operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a namer or naming a sample.
///
/// The color conversions themselves never fail; errors only come from input
/// validation and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A sample component was NaN or infinite.
    #[error("Sample has a non-finite {channel} component: {value}")]
    NonFiniteComponent {
        /// Name of the offending channel.
        channel: &'static str,
        /// The offending value.
        value: Component,
    },

    /// A sample component was finite but larger in magnitude than
    /// [`Srgb::MAX_MAGNITUDE`](crate::models::Srgb::MAX_MAGNITUDE).
    #[error("Sample has an out of range {channel} component: {value}")]
    ComponentOutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The offending value.
        value: Component,
    },

    /// A palette was built without any entries.
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Two palette entries share a name.
    #[error("Duplicate palette name: {0}")]
    DuplicateName(String),

    /// A palette reference color had a NaN, infinite or out of range
    /// component.
    #[error("Palette color {0} has a non-finite or out of range component")]
    NonFiniteReference(String),

    /// Grayscale bounds or the saturation threshold are unusable.
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// A hex color string could not be parsed.
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),
}
