//! Drawing helpers and labels for the presentation surface.
//!
//! Everything here is a rendering convenience layered on top of the
//! detection/measurement outputs; nothing feeds back into the pipeline.

use image::{imageops, GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_line_segment_mut};

use quad_gauge_detect::DetectedQuad;
use quad_gauge_measure::{Calibration, FrameReport, Measurement};

const QUAD_OUTLINE: Rgb<u8> = Rgb([0, 255, 0]);
const CENTER_LINE: Rgb<u8> = Rgb([255, 0, 0]);
const SAMPLE_MARKER: Rgb<u8> = Rgb([0, 255, 0]);

/// Outline every detected quad on the frame.
pub fn draw_quads(frame: &mut RgbImage, quads: &[DetectedQuad]) {
    for quad in quads {
        let n = quad.vertices.len();
        for i in 0..n {
            let a = quad.vertices[i];
            let b = quad.vertices[(i + 1) % n];
            draw_line_segment_mut(frame, (a.x, a.y), (b.x, b.y), QUAD_OUTLINE);
        }
    }
}

/// Line between the first two quad centers, when both exist.
pub fn draw_center_line(frame: &mut RgbImage, quads: &[DetectedQuad]) {
    if let [a, b, ..] = quads {
        let (ca, cb) = (a.center(), b.center());
        draw_line_segment_mut(frame, (ca.x, ca.y), (cb.x, cb.y), CENTER_LINE);
    }
}

/// Crosshair at the operator's last sampling position.
pub fn draw_sample_marker(frame: &mut RgbImage, x: u32, y: u32) {
    draw_cross_mut(frame, SAMPLE_MARKER, x as i32, y as i32);
}

/// Downscaled RGB rendering of the detection mask for a preview pane.
pub fn mask_preview(mask: &GrayImage, width: u32, height: u32) -> RgbImage {
    let small = imageops::resize(mask, width, height, imageops::FilterType::Nearest);
    let mut preview = RgbImage::new(width, height);
    for (dst, src) in preview.pixels_mut().zip(small.pixels()) {
        *dst = Rgb([src[0], src[0], src[0]]);
    }
    preview
}

pub fn shape_count_label(report: &FrameReport) -> String {
    format!("Squares: {}", report.shape_count)
}

pub fn distance_label(report: &FrameReport) -> String {
    match report.measurement {
        Some(Measurement {
            distance_cm: Some(cm),
            ..
        }) => format!("Distance: {cm:.1} cm"),
        Some(Measurement { distance_px, .. }) => format!("Distance: {distance_px:.1} px"),
        None => "Distance: ---".to_string(),
    }
}

pub fn calibration_label(calibration: &Calibration) -> String {
    match calibration.pixels_per_cm() {
        Some(scale) => format!("Calibrated: {scale:.1} px/cm"),
        None => "Not calibrated".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use quad_gauge_measure::report;

    fn square(x: f32, y: f32, side: f32) -> DetectedQuad {
        DetectedQuad::new(vec![
            Point2::new(x, y),
            Point2::new(x + side, y),
            Point2::new(x + side, y + side),
            Point2::new(x, y + side),
        ])
    }

    #[test]
    fn quad_outline_touches_the_frame() {
        let mut frame = RgbImage::new(64, 64);
        draw_quads(&mut frame, &[square(10.0, 10.0, 20.0)]);
        assert_eq!(*frame.get_pixel(15, 10), QUAD_OUTLINE);
        assert_eq!(*frame.get_pixel(10, 15), QUAD_OUTLINE);
    }

    #[test]
    fn center_line_connects_first_two_quads() {
        let mut frame = RgbImage::new(128, 64);
        let quads = [square(10.0, 20.0, 10.0), square(90.0, 20.0, 10.0)];
        draw_center_line(&mut frame, &quads);
        // Midpoint of the two centers lies on the horizontal line.
        assert_eq!(*frame.get_pixel(55, 25), CENTER_LINE);
    }

    #[test]
    fn center_line_needs_two_quads() {
        let mut frame = RgbImage::new(64, 64);
        draw_center_line(&mut frame, &[square(10.0, 10.0, 10.0)]);
        assert!(frame.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn mask_preview_downscales_to_gray_rgb() {
        let mut mask = GrayImage::new(64, 48);
        for p in mask.pixels_mut() {
            p[0] = 255;
        }
        let preview = mask_preview(&mask, 32, 24);
        assert_eq!(preview.dimensions(), (32, 24));
        assert!(preview.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn labels_track_measurement_state() {
        let none = report(&[], &Calibration::new());
        assert_eq!(shape_count_label(&none), "Squares: 0");
        assert_eq!(distance_label(&none), "Distance: ---");

        let quads = [square(0.0, 0.0, 76.0), square(100.0, 0.0, 76.0)];
        let px_only = report(&quads, &Calibration::new());
        assert_eq!(distance_label(&px_only), "Distance: 100.0 px");

        let mut calibration = Calibration::new();
        calibration.calibrate(Some(&quads[0]), 7.6).unwrap();
        let with_cm = report(&quads, &calibration);
        assert_eq!(distance_label(&with_cm), "Distance: 10.0 cm");
        assert_eq!(calibration_label(&calibration), "Calibrated: 10.0 px/cm");
    }
}
