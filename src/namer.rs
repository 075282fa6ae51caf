//! The top-level decision: gray by brightness, or the nearest palette color.

use lazy_static::lazy_static;
use tracing::debug;

use crate::{
    color::Component,
    error::{Error, Result},
    grayscale::GrayscaleGate,
    models::{Hsv, Srgb},
    palette::Palette,
};

/// Samples with an HSV saturation below this are named by brightness.
pub const DEFAULT_SATURATION_THRESHOLD: Component = 0.2;

lazy_static! {
    static ref DEFAULT_NAMER: ColorNamer = ColorNamer::default();
}

/// The outcome of naming a single sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading<'a> {
    /// The color name.
    pub name: &'a str,
    /// The sample that was named.
    pub sample: Srgb,
    /// The sample in HSV notation, used for the gray decision.
    pub hsv: Hsv,
    /// The fully saturated color the palette was searched with, or `None`
    /// when the sample was named by brightness.
    pub saturated: Option<Srgb>,
}

impl Reading<'_> {
    /// True when the sample was named by the grayscale gate.
    pub fn is_achromatic(&self) -> bool {
        self.saturated.is_none()
    }
}

/// Names samples with a palette and a grayscale gate.
#[derive(Clone, Debug)]
pub struct ColorNamer {
    palette: Palette,
    gate: GrayscaleGate,
    saturation_threshold: Component,
}

impl ColorNamer {
    /// Combine a palette and a gate. Samples with a saturation strictly below
    /// `saturation_threshold` go to the gate.
    pub fn new(
        palette: Palette,
        gate: GrayscaleGate,
        saturation_threshold: Component,
    ) -> Result<Self> {
        if !saturation_threshold.is_finite() {
            return Err(Error::InvalidThresholds(format!(
                "saturation threshold must be finite, got {saturation_threshold}"
            )));
        }

        Ok(Self {
            palette,
            gate,
            saturation_threshold,
        })
    }

    /// The shared namer with the built-in palette and bands.
    pub fn builtin() -> &'static ColorNamer {
        &DEFAULT_NAMER
    }

    /// The palette used for chromatic samples.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The gate used for achromatic samples.
    pub fn gate(&self) -> &GrayscaleGate {
        &self.gate
    }

    /// The saturation below which samples count as gray.
    pub fn saturation_threshold(&self) -> Component {
        self.saturation_threshold
    }

    /// Name `sample` and report how the name was reached.
    ///
    /// Fails when a component of the sample is NaN or infinite, or when its
    /// magnitude exceeds [`Srgb::MAX_MAGNITUDE`].
    pub fn read(&self, sample: &Srgb) -> Result<Reading<'_>> {
        if let Some((channel, value)) = sample.non_finite_channel() {
            return Err(Error::NonFiniteComponent { channel, value });
        }
        if let Some((channel, value)) = sample.out_of_range_channel() {
            return Err(Error::ComponentOutOfRange { channel, value });
        }

        let hsv = sample.to_hsv();

        let reading = if hsv.saturation < self.saturation_threshold {
            let name = self.gate.classify(hsv.value);
            debug!(
                %sample,
                saturation = hsv.saturation,
                value = hsv.value,
                color_name = name,
                "achromatic sample"
            );
            Reading {
                name,
                sample: *sample,
                hsv,
                saturated: None,
            }
        } else {
            let found = self.palette.closest(sample);
            debug!(
                %sample,
                saturated = %found.saturated,
                distance = found.distance,
                color_name = found.name,
                "chromatic sample"
            );
            Reading {
                name: found.name,
                sample: *sample,
                hsv,
                saturated: Some(found.saturated),
            }
        };

        Ok(reading)
    }

    /// Name `sample`.
    pub fn name(&self, sample: &Srgb) -> Result<&str> {
        self.read(sample).map(|reading| reading.name)
    }
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            gate: GrayscaleGate::default(),
            saturation_threshold: DEFAULT_SATURATION_THRESHOLD,
        }
    }
}

/// Name `sample` with the built-in palette and grayscale bands.
///
/// ```rust
/// use chromaname::{name_color, models::Srgb};
/// assert_eq!(name_color(&Srgb::new(0.0, 0.0, 1.0)).unwrap(), "Blue");
/// assert_eq!(name_color(&Srgb::new(0.5, 0.5, 0.5)).unwrap(), "Medium Gray");
/// ```
pub fn name_color(sample: &Srgb) -> Result<&'static str> {
    ColorNamer::builtin().name(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grayscale::DEFAULT_NAMES;
    use proptest::prelude::*;

    #[test]
    fn primaries() {
        assert_eq!(name_color(&Srgb::new(1.0, 0.0, 0.0)).unwrap(), "Red");
        assert_eq!(name_color(&Srgb::new(0.0, 1.0, 0.0)).unwrap(), "Green");
        assert_eq!(name_color(&Srgb::new(0.0, 0.0, 1.0)).unwrap(), "Blue");
    }

    #[test]
    fn grays_use_the_gate() {
        assert_eq!(name_color(&Srgb::new(0.0, 0.0, 0.0)).unwrap(), "Black");
        assert_eq!(name_color(&Srgb::new(0.3, 0.3, 0.3)).unwrap(), "Dark Gray");
        assert_eq!(name_color(&Srgb::new(0.5, 0.5, 0.5)).unwrap(), "Medium Gray");
        assert_eq!(name_color(&Srgb::new(0.7, 0.7, 0.75)).unwrap(), "Light Gray");
        assert_eq!(name_color(&Srgb::WHITE).unwrap(), "White");
    }

    #[test]
    fn saturation_exactly_at_threshold_goes_to_the_palette() {
        // delta 0.125 over value 0.625 is exactly 0.2.
        let reading = ColorNamer::builtin()
            .read(&Srgb::new(0.625, 0.5, 0.5))
            .unwrap();
        assert_eq!(reading.hsv.saturation, 0.2);
        assert!(!reading.is_achromatic());
        assert_eq!(reading.saturated, Some(Srgb::new(0.625, 0.0, 0.0)));
        assert!(Palette::builtin().names().any(|n| n == reading.name));
    }

    #[test]
    fn saturation_just_below_threshold_is_gray() {
        let reading = ColorNamer::builtin()
            .read(&Srgb::new(0.625, 0.51, 0.51))
            .unwrap();
        assert!(reading.hsv.saturation < 0.2);
        assert!(reading.is_achromatic());
        assert_eq!(reading.name, "Light Gray");
    }

    #[test]
    fn chromatic_reading_exposes_the_saturated_color() {
        let reading = ColorNamer::builtin()
            .read(&Srgb::new(1.0, 0.6, 0.6))
            .unwrap();
        assert_eq!(reading.name, "Red");
        assert_eq!(reading.sample, Srgb::new(1.0, 0.6, 0.6));
        assert_eq!(reading.saturated, Some(Srgb::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn rejects_non_finite_samples() {
        let result = name_color(&Srgb::new(0.5, Component::INFINITY, 0.0));
        assert!(matches!(
            result,
            Err(Error::NonFiniteComponent { channel: "green", .. })
        ));

        let result = name_color(&Srgb::new(Component::NAN, 0.0, 0.0));
        assert!(matches!(
            result,
            Err(Error::NonFiniteComponent { channel: "red", .. })
        ));
    }

    #[test]
    fn rejects_huge_samples() {
        let result = name_color(&Srgb::new(0.0, 0.0, 1.0e20));
        assert!(matches!(
            result,
            Err(Error::ComponentOutOfRange { channel: "blue", .. })
        ));

        let result = name_color(&Srgb::new(-1.0e20, 0.0, 0.0));
        assert!(matches!(
            result,
            Err(Error::ComponentOutOfRange { channel: "red", .. })
        ));
    }

    #[test]
    fn samples_at_the_limit_keep_their_hue() {
        let limit = Srgb::MAX_MAGNITUDE;
        assert_eq!(name_color(&Srgb::new(0.0, 0.0, limit)).unwrap(), "Blue");
        assert_eq!(name_color(&Srgb::new(0.0, limit, 0.0)).unwrap(), "Green");
    }

    #[test]
    fn custom_threshold() {
        let namer = ColorNamer::new(Palette::default(), GrayscaleGate::default(), 0.5).unwrap();
        // Saturation 0.4: a color for the built-in namer, gray for this one.
        let sample = Srgb::new(1.0, 0.6, 0.6);
        assert_eq!(namer.name(&sample).unwrap(), "White");
        assert_eq!(name_color(&sample).unwrap(), "Red");
        assert_eq!(namer.saturation_threshold(), 0.5);
    }

    #[test]
    fn rejects_non_finite_threshold() {
        let result = ColorNamer::new(
            Palette::default(),
            GrayscaleGate::default(),
            Component::NAN,
        );
        assert!(matches!(result, Err(Error::InvalidThresholds(_))));
    }

    proptest! {
        #[test]
        fn every_finite_sample_gets_a_known_name(
            red in -0.5f64..1.5,
            green in -0.5f64..1.5,
            blue in -0.5f64..1.5,
        ) {
            let sample = Srgb::new(red as Component, green as Component, blue as Component);
            let name = name_color(&sample).unwrap();

            let known = Palette::builtin().names().any(|n| n == name)
                || DEFAULT_NAMES.contains(&name);
            prop_assert!(known, "unexpected name {}", name);
            prop_assert_eq!(name_color(&sample).unwrap(), name);
        }

        #[test]
        fn in_gamut_grays_never_reach_the_palette(value in 0.0f64..=1.0) {
            let v = value as Component;
            let reading = ColorNamer::builtin().read(&Srgb::new(v, v, v)).unwrap();
            prop_assert!(reading.is_achromatic());
        }
    }
}
