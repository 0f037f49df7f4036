//! High-level facade for the `quad-gauge-*` workspace.
//!
//! Detects quadrilaterals matching an operator-sampled color band in live
//! video frames and measures the physical distance between two of them
//! via a calibration reference of known width.
//!
//! ## Quickstart
//!
//! ```
//! use quad_gauge::{analyze_frame, Calibration, Hsv, HsvRange, QuadParams};
//!
//! let range = HsvRange::around(Hsv::new(41, 23, 236));
//! let frame = image::RgbImage::new(640, 480);
//!
//! let analysis = analyze_frame(&frame, &range, &QuadParams::default(), &Calibration::new());
//! println!("shapes: {}", analysis.report.shape_count);
//! ```
//!
//! ## API map
//! - [`core`]: color representations, HSV windows, pixel sampling.
//! - [`detect`]: mask building, contours, polygon approximation.
//! - [`measure`]: calibration and center-to-center distances.
//! - [`capture`] (feature `capture`): camera selection and the capture loop.
//! - [`overlay`]: drawing helpers and labels for the presentation surface.

#[cfg(feature = "capture")]
pub use quad_gauge_capture as capture;
pub use quad_gauge_core as core;
pub use quad_gauge_detect as detect;
pub use quad_gauge_measure as measure;

pub use quad_gauge_core::{ColorSample, Hsv, HsvRange, Rgb};
pub use quad_gauge_detect::{DetectedQuad, QuadDetector, QuadParams};
pub use quad_gauge_measure::{Calibration, FrameReport, Measurement};

mod analyze;
pub mod overlay;

pub use analyze::{analyze_frame, FrameAnalysis};
