use crate::{
    color::{Component, Components},
    math::lerp,
    models::{encoding::Encoding, Rgb},
};

impl<E: Encoding> Rgb<E> {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them. Components are mixed as stored, so gamma
    /// encoded colors mix in gamma space.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        let Components(r0, g0, b0) = self.to_components();
        let Components(r1, g1, b1) = other.to_components();

        Self::new(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
    }
}
