use nalgebra::distance;
use serde::{Deserialize, Serialize};

use quad_gauge_detect::DetectedQuad;

use crate::calibrate::Calibration;

/// Center-to-center distance between two shapes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Measurement {
    pub distance_px: f32,
    /// Present only when a calibration is set.
    pub distance_cm: Option<f32>,
}

/// Everything the presentation layer needs from one frame. Produced
/// fresh each frame, never retained.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FrameReport {
    pub shape_count: usize,
    /// `None` whenever fewer than two shapes are present — a normal,
    /// frequent state, not an error.
    pub measurement: Option<Measurement>,
}

/// Euclidean distance between the vertex-mean centers of two quads.
pub fn distance_between(
    a: &DetectedQuad,
    b: &DetectedQuad,
    calibration: &Calibration,
) -> Measurement {
    let px = distance(&a.center(), &b.center());
    Measurement {
        distance_px: px,
        distance_cm: calibration.pixels_per_cm().map(|scale| px / scale),
    }
}

/// Summarize one frame's detections. The first two quads in discovery
/// order feed the measurement; which physical shape lands first is not
/// stable across frames.
pub fn report(quads: &[DetectedQuad], calibration: &Calibration) -> FrameReport {
    let measurement = match quads {
        [a, b, ..] => Some(distance_between(a, b, calibration)),
        _ => None,
    };
    FrameReport {
        shape_count: quads.len(),
        measurement,
    }
}
