//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

chromaname_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees [0, 360).
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value (brightness) component of the color.
        pub value: Component,
    }
}

impl Hsv {
    /// Return the same hue and value with the given saturation.
    pub fn with_saturation(&self, saturation: Component) -> Self {
        Self::new(self.hue, saturation, self.value)
    }
}
