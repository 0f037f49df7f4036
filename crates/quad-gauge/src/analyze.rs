use image::{GrayImage, RgbImage};

use quad_gauge_core::HsvRange;
use quad_gauge_detect::{DetectedQuad, QuadDetection, QuadDetector, QuadParams};
use quad_gauge_measure::{report, Calibration, FrameReport};

/// Everything one frame produces for the presentation surface.
///
/// Locally scoped to the frame it came from; hand the whole value across
/// threads rather than sharing pieces of it.
pub struct FrameAnalysis {
    pub quads: Vec<DetectedQuad>,
    pub mask: GrayImage,
    pub report: FrameReport,
}

/// Run detection and measurement on one frame.
pub fn analyze_frame(
    frame: &RgbImage,
    range: &HsvRange,
    params: &QuadParams,
    calibration: &Calibration,
) -> FrameAnalysis {
    let QuadDetection { quads, mask } = QuadDetector::new(params.clone()).detect(frame, range);
    let report = report(&quads, calibration);
    FrameAnalysis {
        quads,
        mask,
        report,
    }
}
