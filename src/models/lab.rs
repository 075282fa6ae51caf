//! Model a color in the CIE-Lab color space.

use crate::color::{Component, Components};

chromaname_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl Lab {
    /// Color difference as the straight-line distance between the two colors
    /// (CIE76).
    pub fn distance(&self, other: &Lab) -> Component {
        let Components(dl, da, db) = self.to_components() - other.to_components();
        (dl * dl + da * da + db * db).sqrt()
    }
}
