//! A fixed, ordered set of named reference colors and nearest-color lookup.
//!
//! Queries are pushed to full saturation before matching, because the
//! reference colors are all fully saturated hues and a sample under real
//! lighting rarely is. Distances are measured in CIE-Lab.

use std::borrow::Cow;
use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::trace;

use crate::{
    color::Component,
    error::{Error, Result},
    models::{Lab, Srgb},
};

/// The built-in palette: three primary, three secondary and six tertiary
/// hues, in matching order.
pub const DEFAULT_COLORS: [(&str, Srgb); 12] = [
    // Primary.
    ("Red", Srgb::new(1.0, 0.0, 0.0)),
    ("Yellow", Srgb::new(1.0, 0.65, 0.0)),
    ("Blue", Srgb::new(0.0, 0.0, 1.0)),
    // Secondary.
    ("Orange", Srgb::new(1.0, 0.5, 0.0)),
    ("Green", Srgb::new(0.0, 1.0, 0.0)),
    ("Purple", Srgb::new(1.0, 0.0, 1.0)),
    // Tertiary. Yellow-Orange shares its reference with Orange and never wins.
    ("Red-Orange", Srgb::new(1.0, 0.25, 0.0)),
    ("Yellow-Orange", Srgb::new(1.0, 0.5, 0.0)),
    ("Yellow-Green", Srgb::new(0.5, 1.0, 0.0)),
    ("Blue-Green", Srgb::new(0.0, 0.75, 1.0)),
    ("Blue-Violet", Srgb::new(0.75, 0.0, 1.0)),
    ("Red-Violet", Srgb::new(1.0, 0.0, 0.5)),
];

lazy_static! {
    static ref DEFAULT_PALETTE: Palette = Palette::default();
}

/// A reference color with its name.
#[derive(Clone, Debug)]
pub struct NamedColor {
    name: Cow<'static, str>,
    color: Srgb,
    lab: Lab,
}

impl NamedColor {
    fn new(name: Cow<'static, str>, color: Srgb) -> Self {
        let lab = color.to_xyz().to_lab();
        Self { name, color, lab }
    }

    /// The name returned when this color is the closest match.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reference color.
    pub fn color(&self) -> Srgb {
        self.color
    }

    /// The reference color in CIE-Lab, computed once on construction.
    pub fn lab(&self) -> Lab {
        self.lab
    }
}

/// The result of matching a query against a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match<'a> {
    /// Name of the closest palette entry.
    pub name: &'a str,
    /// Position of that entry in the palette.
    pub index: usize,
    /// CIE-Lab distance between the saturated query and the entry.
    pub distance: Component,
    /// The query after being pushed to full saturation, the color that was
    /// actually matched.
    pub saturated: Srgb,
}

/// An immutable, ordered list of named reference colors.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<NamedColor>,
}

impl Palette {
    /// Build a palette from `(name, color)` pairs. The order of the pairs is
    /// the order used to break ties.
    ///
    /// Fails when there are no entries, when two entries share a name or when
    /// a reference color has a non-finite component or one whose magnitude
    /// exceeds [`Srgb::MAX_MAGNITUDE`].
    pub fn new<N>(colors: impl IntoIterator<Item = (N, Srgb)>) -> Result<Self>
    where
        N: Into<Cow<'static, str>>,
    {
        let mut seen = HashSet::new();
        let mut entries = vec![];

        for (name, color) in colors {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateName(name.into_owned()));
            }
            if color.non_finite_channel().is_some() || color.out_of_range_channel().is_some() {
                return Err(Error::NonFiniteReference(name.into_owned()));
            }
            entries.push(NamedColor::new(name, color));
        }

        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }

        Ok(Self { entries })
    }

    /// The shared built-in palette.
    pub fn builtin() -> &'static Palette {
        &DEFAULT_PALETTE
    }

    /// Number of entries in the palette.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a palette has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in matching order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Iterate over the entry names in matching order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(NamedColor::name)
    }

    /// Find the entry closest to `color` after saturating it.
    ///
    /// On equal distances the entry that comes first in the palette wins.
    pub fn closest(&self, color: &Srgb) -> Match<'_> {
        let saturated = color.saturated();
        let lab = saturated.to_xyz().to_lab();

        let mut best = 0;
        let mut best_distance = Component::MAX;

        for (index, entry) in self.entries.iter().enumerate() {
            let distance = lab.distance(&entry.lab);
            trace!(color_name = %entry.name, distance, "palette candidate");

            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }

        Match {
            name: &self.entries[best].name,
            index: best,
            distance: best_distance,
            saturated,
        }
    }

    /// Return the name of the entry closest to `color`.
    pub fn classify(&self, color: &Srgb) -> &str {
        self.closest(color).name
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_COLORS
                .iter()
                .map(|&(name, color)| NamedColor::new(Cow::Borrowed(name), color))
                .collect(),
        }
    }
}

/// Name `color` with the built-in palette.
pub fn classify(color: &Srgb) -> &'static str {
    Palette::builtin().classify(color)
}
