//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.
//!
//! ```rust
//! use chromaname::models::Srgb;
//! let lab = Srgb::new(0.8235, 0.4118, 0.1176)
//!     .to_linear_light() // convert to srgb-linear.
//!     .to_xyz()          // convert to xyz (D65, 0..100).
//!     .to_lab();         // convert to lab.
//! assert!(lab.lightness > 50.0);
//! ```

mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use hsv::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;
