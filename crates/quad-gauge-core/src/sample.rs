use image::RgbImage;
use serde::Serialize;

use crate::color::{Hsv, Rgb};

/// Color sampled from one frame pixel, in every representation the
/// operator sees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorSample {
    /// Six lowercase hex digits, two per channel.
    pub hex: String,
    pub rgb: Rgb,
    pub hsv: Hsv,
    /// Frame-pixel position the color was read from.
    pub position: (u32, u32),
}

/// Errors from pixel sampling.
#[derive(thiserror::Error, Debug)]
pub enum SampleError {
    #[error("sample position ({x}, {y}) outside {width}x{height} frame")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Read the pixel at `(x, y)` and convert it to all representations.
///
/// No side effects; callers decide whether to keep the sample.
pub fn sample_at(frame: &RgbImage, x: u32, y: u32) -> Result<ColorSample, SampleError> {
    if x >= frame.width() || y >= frame.height() {
        return Err(SampleError::OutOfBounds {
            x,
            y,
            width: frame.width(),
            height: frame.height(),
        });
    }
    let p = frame.get_pixel(x, y);
    let rgb = Rgb::new(p[0], p[1], p[2]);
    Ok(ColorSample {
        hex: rgb.to_hex(),
        rgb,
        hsv: rgb.to_hsv(),
        position: (x, y),
    })
}

/// Map a click in display-canvas space onto frame-pixel space.
///
/// The display canvas may be a different size than the frame; coordinates
/// scale by the width/height ratios and truncate to pixel indices.
pub fn display_to_frame(
    click: (u32, u32),
    canvas: (u32, u32),
    frame: (u32, u32),
) -> (u32, u32) {
    let x = (click.0 as f64 / canvas.0 as f64 * frame.0 as f64) as u32;
    let y = (click.1 as f64 / canvas.1 as f64 * frame.1 as f64) as u32;
    (x, y)
}

/// Append-only store for operator-picked colors.
///
/// No deduplication and no size bound; growth is limited by manual
/// operator actions.
#[derive(Debug, Default)]
pub struct SavedColors {
    samples: Vec<ColorSample>,
}

impl SavedColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: ColorSample) {
        self.samples.push(sample);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorSample> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&ColorSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
