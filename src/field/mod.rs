//! Animated field-line sample generation.
//!
//! A [`FieldSampler`] describes arrows tangential to a family of ellipses
//! tilted around the vertical axis, tracing a toroidal field-line pattern.
//! Each [`FieldSampler::advance`] call nudges the animation phase and
//! regenerates the full sample set in place.

pub mod error;
pub mod sampler;

pub use error::Error;
pub use sampler::FieldSampler;

/// Extent of the visualization volume along the horizontal axes.
pub const HORIZONTAL_RANGE: f32 = 8.0;

/// Extent of the visualization volume along the vertical axis.
pub const VERTICAL_RANGE: f32 = 8.0;

/// Horizontal radius of each field-line ellipse.
pub const ELLIPSE_A: f32 = HORIZONTAL_RANGE / 3.0;

/// Vertical radius of each field-line ellipse.
pub const ELLIPSE_B: f32 = VERTICAL_RANGE;

/// Ticks it takes an arrow to travel one arrow-spacing along its line.
pub const ANIMATION_FRAMES: f32 = 30.0;
