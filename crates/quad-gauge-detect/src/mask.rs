use image::{GrayImage, RgbImage};
use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, erode};

use quad_gauge_core::{HsvRange, Rgb};

/// Foreground value of binary masks produced here.
pub const FOREGROUND: u8 = 255;

/// Build a binary mask: foreground where the pixel's HSV color lies
/// inside `range` on all three channels (inclusive).
pub fn hsv_mask(frame: &RgbImage, range: &HsvRange) -> GrayImage {
    let mut mask = GrayImage::new(frame.width(), frame.height());
    for (dst, src) in mask.pixels_mut().zip(frame.pixels()) {
        let hsv = Rgb::new(src[0], src[1], src[2]).to_hsv();
        dst[0] = if range.contains(hsv) { FOREGROUND } else { 0 };
    }
    mask
}

/// Morphological cleanup: one erosion, then `dilate_passes` dilations
/// with the same square element. Shrinking first suppresses speckle; the
/// regrow passes reconnect fragmented blobs.
pub fn clean_mask(mask: &GrayImage, radius: u8, dilate_passes: u32) -> GrayImage {
    let mut cleaned = erode(mask, Norm::LInf, radius);
    for _ in 0..dilate_passes {
        cleaned = dilate(&cleaned, Norm::LInf, radius);
    }
    cleaned
}
