//! Style helpers shared by the views.

pub mod class_names;
pub mod colors;
pub mod easing;

pub use class_names::cn;
pub use colors::BrandColor;
pub use easing::{CubicBezier, Easing};
