//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    models::lab::Lab,
};

/// Reference white used to normalize XYZ before converting to CIE-Lab, on the
/// same 0..100 scale the sRGB conversion produces.
#[allow(clippy::excessive_precision)]
pub const D65_WHITE_POINT: Components = Components(95.047, 100.0, 108.883);

/// Normalized values above this take the cube root.
const EPSILON: Component = 0.008856;

/// Slope of the linear segment near black.
const SLOPE: Component = 7.787;

chromaname_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point,
    /// scaled so that the white point has a Y of 100.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// The CIE-Lab companding function applied to a white-normalized component.
pub(crate) fn lab_f(value: Component) -> Component {
    if value > EPSILON {
        value.cbrt()
    } else {
        SLOPE * value + 16.0 / 116.0
    }
}

impl Xyz {
    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        Lab::from(*self)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let normalized = Components(
            value.x / D65_WHITE_POINT.0,
            value.y / D65_WHITE_POINT.1,
            value.z / D65_WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = normalized.map(lab_f);

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}
