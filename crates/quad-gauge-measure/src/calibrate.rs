use log::info;
use serde::{Deserialize, Serialize};

use quad_gauge_detect::DetectedQuad;

/// Width of the default physical reference object (a post-it note), cm.
pub const DEFAULT_REFERENCE_WIDTH_CM: f32 = 7.6;

/// Errors from calibration attempts. A failed attempt leaves the
/// calibration state unchanged.
#[derive(thiserror::Error, Debug)]
pub enum CalibrationError {
    #[error("no shape detected for calibration")]
    NoShapeDetected,
    #[error("reference width must be positive, got {0}")]
    InvalidReference(f32),
}

/// Pixel-to-physical scale factor.
///
/// Starts unset; each successful [`calibrate`](Self::calibrate) call
/// overwrites the previous value. Not persisted across sessions.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Calibration {
    pixels_per_cm: Option<f32>,
}

impl Calibration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels_per_cm(&self) -> Option<f32> {
        self.pixels_per_cm
    }

    pub fn is_calibrated(&self) -> bool {
        self.pixels_per_cm.is_some()
    }

    /// Derive the scale from a detected reference shape of known width.
    ///
    /// Uses the shorter side of the shape's minimal-area bounding
    /// rectangle, so the reference may appear in either orientation.
    pub fn calibrate(
        &mut self,
        quad: Option<&DetectedQuad>,
        reference_width_cm: f32,
    ) -> Result<f32, CalibrationError> {
        if !(reference_width_cm > 0.0) {
            return Err(CalibrationError::InvalidReference(reference_width_cm));
        }
        let quad = quad.ok_or(CalibrationError::NoShapeDetected)?;

        let (short_side, _) = quad.min_rect_sides();
        let scale = short_side / reference_width_cm;
        self.pixels_per_cm = Some(scale);
        info!("calibrated: {scale:.1} px/cm (reference {reference_width_cm} cm)");
        Ok(scale)
    }
}
