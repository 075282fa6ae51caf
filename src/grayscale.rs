//! Naming of achromatic samples by brightness alone.

use std::borrow::Cow;

use crate::{
    color::Component,
    error::{Error, Result},
};

/// Inclusive upper bounds of the four darkest bands.
pub const DEFAULT_BOUNDS: [Component; 4] = [0.2, 0.4, 0.6, 0.8];

/// Band names from darkest to brightest.
pub const DEFAULT_NAMES: [&str; 5] = ["Black", "Dark Gray", "Medium Gray", "Light Gray", "White"];

fn band(bounds: &[Component; 4], value: Component) -> usize {
    bounds
        .iter()
        .position(|&bound| value <= bound)
        .unwrap_or(bounds.len())
}

/// Name an HSV value with the default bands.
///
/// ```rust
/// use chromaname::classify_achromatic;
/// assert_eq!(classify_achromatic(0.2), "Black");
/// assert_eq!(classify_achromatic(0.5), "Medium Gray");
/// ```
pub fn classify_achromatic(value: Component) -> &'static str {
    DEFAULT_NAMES[band(&DEFAULT_BOUNDS, value)]
}

/// Splits the value axis into five named bands.
#[derive(Clone, Debug)]
pub struct GrayscaleGate {
    bounds: [Component; 4],
    names: [Cow<'static, str>; 5],
}

impl GrayscaleGate {
    /// Create a gate from four ascending, inclusive upper bounds and the names
    /// of the five bands they produce.
    pub fn new<N>(bounds: [Component; 4], names: [N; 5]) -> Result<Self>
    where
        N: Into<Cow<'static, str>>,
    {
        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(Error::InvalidThresholds(format!(
                "grayscale bounds must be finite, got {bounds:?}"
            )));
        }

        if bounds.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(Error::InvalidThresholds(format!(
                "grayscale bounds must be ascending, got {bounds:?}"
            )));
        }

        Ok(Self {
            bounds,
            names: names.map(Into::into),
        })
    }

    /// The band upper bounds.
    pub fn bounds(&self) -> [Component; 4] {
        self.bounds
    }

    /// Iterate over the band names from darkest to brightest.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_ref())
    }

    /// Name the band that `value` falls in.
    pub fn classify(&self, value: Component) -> &str {
        &self.names[band(&self.bounds, value)]
    }
}

impl Default for GrayscaleGate {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS,
            names: DEFAULT_NAMES.map(Cow::Borrowed),
        }
    }
}
