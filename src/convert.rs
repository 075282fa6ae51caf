//! Conversions between the sRGB color space and the HSV notation.
//!
//! These follow the piecewise helpers of common game engines rather than the
//! CSS algorithms: hue ties resolve towards red, then green, and nothing is
//! clamped, so components outside [0, 1] pass through unchanged.

use crate::models::{Hsv, Srgb};

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }

    /// Return this color at full saturation, keeping its hue and value.
    pub fn saturated(&self) -> Srgb {
        self.to_hsv().with_saturation(1.0).to_srgb()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::color::Components;

    /// Convert from RGB notation to HSV notation, with the hue in degrees.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        // The dominant channel picks the hue sector; the other two are passed
        // in hue order.
        let (offset, dominant, one, two) = if blue > green && blue > red {
            (240.0, blue, red, green)
        } else if green > red {
            (120.0, green, blue, red)
        } else {
            (0.0, red, green, blue)
        };

        let value = dominant;
        if value == 0.0 {
            return Components(0.0, 0.0, 0.0);
        }

        let small = one.min(two);
        let delta = value - small;

        let (hue, saturation) = if delta != 0.0 {
            (offset + 60.0 * (one - two) / delta, delta / value)
        } else {
            (offset + 60.0 * (one - two), 0.0)
        };

        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        Components(hue, saturation, value)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        if saturation == 0.0 {
            return Components(value, value, value);
        }

        if value == 0.0 {
            return Components(0.0, 0.0, 0.0);
        }

        let scaled = hue / 60.0;
        let floor = scaled.floor();
        let t = scaled - floor;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * t);
        let r = value * (1.0 - saturation * (1.0 - t));

        match floor.rem_euclid(6.0) as u8 {
            0 => Components(value, r, p),
            1 => Components(q, value, p),
            2 => Components(p, value, r),
            3 => Components(p, q, value),
            4 => Components(r, p, value),
            _ => Components(value, p, q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn assert_srgb_eq(actual: Srgb, expected: Srgb) {
        assert_component_eq!(actual.red, expected.red);
        assert_component_eq!(actual.green, expected.green);
        assert_component_eq!(actual.blue, expected.blue);
    }

    #[test]
    fn primaries_to_hsv() {
        assert_eq!(Srgb::new(1.0, 0.0, 0.0).to_hsv(), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(Srgb::new(0.0, 1.0, 0.0).to_hsv(), Hsv::new(120.0, 1.0, 1.0));
        assert_eq!(Srgb::new(0.0, 0.0, 1.0).to_hsv(), Hsv::new(240.0, 1.0, 1.0));
    }

    #[test]
    fn dominant_channel_ties() {
        // Blue only leads when strictly greater, so cyan is read from green.
        assert_eq!(Srgb::new(0.0, 1.0, 1.0).to_hsv(), Hsv::new(180.0, 1.0, 1.0));
        // Green only leads over red when strictly greater, so yellow is read
        // from red.
        assert_eq!(Srgb::new(1.0, 1.0, 0.0).to_hsv(), Hsv::new(60.0, 1.0, 1.0));
        assert_eq!(Srgb::new(0.5, 0.5, 0.25).to_hsv(), Hsv::new(60.0, 0.5, 0.5));
    }

    #[test]
    fn negative_hue_wraps() {
        let hsv = Srgb::new(1.0, 0.0, 0.5).to_hsv();
        assert_component_eq!(hsv.hue, 330.0, 1e-3);
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 1.0);
    }

    #[test]
    fn grays_have_no_saturation() {
        let hsv = Srgb::new(0.5, 0.5, 0.5).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.5));

        assert_eq!(Srgb::new(0.0, 0.0, 0.0).to_hsv(), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn saturation_is_delta_over_value() {
        let hsv = Srgb::new(0.625, 0.5, 0.5).to_hsv();
        assert_eq!(hsv.saturation, 0.2);
        assert_eq!(hsv.value, 0.625);
        assert_eq!(hsv.hue, 0.0);
    }

    #[test]
    fn hsv_round_trips_in_every_sector() {
        for color in [
            Srgb::new(0.9, 0.3, 0.1),
            Srgb::new(0.6, 0.8, 0.2),
            Srgb::new(0.1, 0.7, 0.4),
            Srgb::new(0.2, 0.4, 0.9),
            Srgb::new(0.5, 0.1, 0.8),
            Srgb::new(0.9, 0.2, 0.6),
        ] {
            assert_srgb_eq(color.to_hsv().to_srgb(), color);
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(
            Hsv::new(200.0, 0.0, 0.4).to_srgb(),
            Srgb::new(0.4, 0.4, 0.4)
        );
    }

    #[test]
    fn hue_outside_a_turn_wraps() {
        assert_srgb_eq(Hsv::new(360.0, 1.0, 1.0).to_srgb(), Srgb::new(1.0, 0.0, 0.0));
        assert_srgb_eq(Hsv::new(-60.0, 1.0, 1.0).to_srgb(), Srgb::new(1.0, 0.0, 1.0));
        assert_srgb_eq(
            Hsv::new(-1.0, 1.0, 1.0).to_srgb(),
            Hsv::new(359.0, 1.0, 1.0).to_srgb(),
        );
    }

    #[test]
    fn saturated_primaries_are_fixed_points() {
        for color in [
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(0.0, 1.0, 0.0),
            Srgb::new(0.0, 0.0, 1.0),
            Srgb::new(1.0, 0.5, 0.0),
        ] {
            assert_eq!(color.saturated(), color);
        }
    }

    #[test]
    fn saturate_keeps_hue_and_value() {
        let saturated = Srgb::new(0.8, 0.6, 0.6).saturated();
        assert_srgb_eq(saturated, Srgb::new(0.8, 0.0, 0.0));

        let saturated = Srgb::new(0.4, 0.5, 0.45).saturated();
        let hsv = saturated.to_hsv();
        assert_component_eq!(hsv.hue, 150.0, 1e-3);
        assert_component_eq!(hsv.saturation, 1.0);
        assert_component_eq!(hsv.value, 0.5);
    }

    #[test]
    fn saturating_a_gray_gives_red() {
        assert_eq!(
            Srgb::new(0.5, 0.5, 0.5).saturated(),
            Srgb::new(0.5, 0.0, 0.0)
        );
    }

    #[test]
    fn large_components_pass_through() {
        let hsv = Srgb::new(2.0, 0.0, 0.0).to_hsv();
        assert_eq!(hsv.value, 2.0);
        assert_eq!(hsv.to_srgb(), Srgb::new(2.0, 0.0, 0.0));
    }
}
