//! Procedural renderer for the wallet app icon.
//!
//! The icon is composed from scratch at every size rather than downscaled
//! from one master image: a soft-edged gradient disc, a rounded wallet body
//! with flap, seam and card slots, a letter mark, and a shine highlight. All
//! geometry is derived from the requested size, so rendering is deterministic
//! for a given size and font-resolution outcome.

pub mod export;
pub mod font;
pub mod render;

pub use export::{export_all, DEFAULT_SIZES};
pub use render::{ring_color, IconRenderer, IconStyle, ShapeSpec};
