//! Color primitives for the quad-gauge measurement pipeline.
//!
//! This crate is intentionally small: color representations and their
//! conversions, the HSV detection-window construction, and bounds-checked
//! pixel sampling. It does *not* depend on the camera or on any detector.

mod color;
mod logger;
mod range;
mod sample;

pub use color::{Hsv, HexError, Rgb, HUE_MAX};
pub use range::{
    HsvRange, HUE_TOLERANCE, SATURATION_CAP, SATURATION_TOLERANCE, VALUE_TOLERANCE,
};
pub use sample::{display_to_frame, sample_at, ColorSample, SampleError, SavedColors};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
