//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

/// Tags that specify whether RGB components carry the sRGB transfer function.
pub mod encoding {
    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding: Copy + std::fmt::Debug + PartialEq {}

    /// Components are gamma encoded, as stored by displays and textures.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

chromaname_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

/// Channels above this value take the power segment of the transfer function.
const LINEAR_THRESHOLD: Component = 0.04045;

impl Srgb {
    /// Pure white, substituted when no frame can be sampled.
    pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);

    /// Create a color from 8-bit channels.
    pub fn from_rgb8([red, green, blue]: [u8; 3]) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Convert this model from gamma encoded to linear light.
    ///
    /// Nothing is clamped. Channels at or below the threshold, negative ones
    /// included, take the linear segment, so the power is only ever applied
    /// to a positive base.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                if value > LINEAR_THRESHOLD {
                    ((value + 0.055) / 1.055).powf(2.4)
                } else {
                    value / 12.92
                }
            })
            .into()
    }

    /// Convert straight to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }
}

impl SrgbLinear {
    /// Convert to CIE-XYZ, scaled so that white has a Y of 100.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.2126, 0.0193,
            0.3576, 0.7152, 0.1192,
            0.1805, 0.0722, 0.9505,
        );

        transform(&TO_XYZ, self.to_components().map(|v| v * 100.0)).into()
    }
}

impl<E: encoding::Encoding> std::fmt::Display for Rgb<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl Srgb {
    /// Largest channel magnitude accepted for naming. Averaged samples may
    /// stray past [0, 1]; anything within this limit converts to a finite Lab
    /// color.
    pub const MAX_MAGNITUDE: Component = 1000.0;

    const CHANNELS: [&'static str; 3] = ["red", "green", "blue"];

    /// Return the NaN or infinite channel, if any, by name.
    pub(crate) fn non_finite_channel(&self) -> Option<(&'static str, Component)> {
        self.to_components()
            .first_non_finite()
            .map(|(index, value)| (Self::CHANNELS[index], value))
    }

    /// Return the first channel whose magnitude exceeds [`Srgb::MAX_MAGNITUDE`].
    pub(crate) fn out_of_range_channel(&self) -> Option<(&'static str, Component)> {
        let Components(red, green, blue) = self.to_components();
        Self::CHANNELS
            .into_iter()
            .zip([red, green, blue])
            .find(|(_, value)| value.abs() > Self::MAX_MAGNITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic_rgb_colors() {
        let srgb = Srgb::new(0.1, 0.2, 0.3);
        assert_eq!(srgb.red, 0.1);
        assert_eq!(srgb.green, 0.2);
        assert_eq!(srgb.blue, 0.3);
        assert_eq!(srgb.to_components(), Components(0.1, 0.2, 0.3));
    }

    #[test]
    fn from_rgb8_scales_to_unit_range() {
        let c = Srgb::from_rgb8([255, 0, 51]);
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);
        assert_component_eq!(c.blue, 0.2);
    }

    #[test]
    fn threshold_takes_linear_segment() {
        let linear = Srgb::new(0.04045, 0.0, 1.0).to_linear_light();
        assert_eq!(linear.red, 0.04045 / 12.92);
        assert_eq!(linear.green, 0.0);
        assert_component_eq!(linear.blue, 1.0);
    }

    #[test]
    fn above_threshold_takes_power_segment() {
        let linear = Srgb::new(0.5, 0.5, 0.5).to_linear_light();
        assert_component_eq!(linear.red, 0.21404114);
    }

    #[test]
    fn negative_and_large_inputs_stay_finite() {
        let linear = Srgb::new(-0.5, 1.5, -0.01).to_linear_light();
        assert_eq!(linear.red, -0.5 / 12.92);
        assert!(linear.green > 1.0 && linear.green.is_finite());
        assert!(linear.blue < 0.0);

        let xyz = Srgb::new(-0.5, 1.5, -0.01).to_xyz();
        assert!(xyz.x.is_finite() && xyz.y.is_finite() && xyz.z.is_finite());
    }

    #[test]
    fn white_to_xyz() {
        let xyz = Srgb::WHITE.to_xyz();
        assert_component_eq!(xyz.x, 95.05, 1e-3);
        assert_component_eq!(xyz.y, 100.0, 1e-3);
        assert_component_eq!(xyz.z, 108.9, 1e-3);
    }

    #[test]
    fn primaries_to_xyz() {
        let red = Srgb::new(1.0, 0.0, 0.0).to_xyz();
        assert_component_eq!(red.x, 41.24, 1e-3);
        assert_component_eq!(red.y, 21.26, 1e-3);
        assert_component_eq!(red.z, 1.93, 1e-3);

        let blue = Srgb::new(0.0, 0.0, 1.0).to_xyz();
        assert_component_eq!(blue.x, 18.05, 1e-3);
        assert_component_eq!(blue.y, 7.22, 1e-3);
        assert_component_eq!(blue.z, 95.05, 1e-3);
    }

    #[test]
    fn detects_non_finite_channel() {
        assert_eq!(Srgb::new(0.0, 0.5, 1.0).non_finite_channel(), None);
        let (channel, _) = Srgb::new(0.0, 0.5, Component::NAN)
            .non_finite_channel()
            .unwrap();
        assert_eq!(channel, "blue");
    }

    #[test]
    fn detects_out_of_range_channel() {
        assert_eq!(Srgb::new(-0.5, 1.5, Srgb::MAX_MAGNITUDE).out_of_range_channel(), None);
        assert_eq!(
            Srgb::new(0.0, -1.0e20, 1.0e20).out_of_range_channel(),
            Some(("green", -1.0e20))
        );
    }

    #[test]
    fn conversion_stays_finite_up_to_the_limit() {
        let lab = Srgb::new(Srgb::MAX_MAGNITUDE, 0.0, -Srgb::MAX_MAGNITUDE)
            .to_xyz()
            .to_lab();
        assert!(lab.lightness.is_finite() && lab.a.is_finite() && lab.b.is_finite());
    }
}
