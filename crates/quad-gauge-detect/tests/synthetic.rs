use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use quad_gauge_core::{Hsv, HsvRange};
use quad_gauge_detect::{QuadDetector, QuadParams, FOREGROUND};

const PASTEL: Rgb<u8> = Rgb([228, 236, 215]);
const BACKDROP: Rgb<u8> = Rgb([40, 40, 40]);

fn pastel_range() -> HsvRange {
    HsvRange::around(Hsv::new(41, 23, 236))
}

fn backdrop(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BACKDROP)
}

fn draw_square(frame: &mut RgbImage, x: i32, y: i32, side: u32) {
    draw_filled_rect_mut(frame, Rect::at(x, y).of_size(side, side), PASTEL);
}

#[test]
fn single_square_yields_one_four_vertex_quad() {
    let mut frame = backdrop(640, 480);
    draw_square(&mut frame, 50, 50, 100);

    let detection = QuadDetector::new(QuadParams::default()).detect(&frame, &pastel_range());

    assert_eq!(detection.quads.len(), 1);
    let quad = &detection.quads[0];
    assert_eq!(quad.vertices.len(), 4);

    // Morphology regrows the blob slightly but leaves the center alone.
    let center = quad.center();
    assert!((center.x - 99.5).abs() < 2.0, "center.x = {}", center.x);
    assert!((center.y - 99.5).abs() < 2.0, "center.y = {}", center.y);

    // Erode once (−4 px) then dilate twice (+8 px) on a 100 px square.
    let (short, long) = quad.min_rect_sides();
    assert!((100.0..=108.0).contains(&short), "short side = {short}");
    assert!((100.0..=108.0).contains(&long), "long side = {long}");
}

#[test]
fn mask_covers_the_drawn_square() {
    let mut frame = backdrop(320, 240);
    draw_square(&mut frame, 60, 60, 80);

    let detection = QuadDetector::new(QuadParams::default()).detect(&frame, &pastel_range());
    assert_eq!(detection.mask.get_pixel(100, 100)[0], FOREGROUND);
    assert_eq!(detection.mask.get_pixel(10, 10)[0], 0);
}

#[test]
fn sub_threshold_blob_is_rejected() {
    let mut frame = backdrop(320, 240);
    // Even after the dilation passes this stays well under 1000 px².
    draw_square(&mut frame, 100, 100, 20);

    let detection = QuadDetector::new(QuadParams::default()).detect(&frame, &pastel_range());
    assert!(detection.quads.is_empty());
}

#[test]
fn two_squares_are_both_detected() {
    let mut frame = backdrop(640, 480);
    draw_square(&mut frame, 20, 100, 60);
    draw_square(&mut frame, 200, 100, 60);

    let detection = QuadDetector::new(QuadParams::default()).detect(&frame, &pastel_range());
    assert_eq!(detection.quads.len(), 2);

    let mut xs: Vec<f32> = detection.quads.iter().map(|q| q.center().x).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((xs[0] - 49.5).abs() < 2.0, "left center = {}", xs[0]);
    assert!((xs[1] - 229.5).abs() < 2.0, "right center = {}", xs[1]);
}

#[test]
fn rotated_square_is_still_accepted() {
    let mut frame = backdrop(320, 240);
    let diamond = [
        Point::new(120, 40),
        Point::new(180, 100),
        Point::new(120, 160),
        Point::new(60, 100),
    ];
    draw_polygon_mut(&mut frame, &diamond, PASTEL);

    let detection = QuadDetector::new(QuadParams::default()).detect(&frame, &pastel_range());
    assert_eq!(detection.quads.len(), 1);

    let center = detection.quads[0].center();
    assert!((center.x - 120.0).abs() < 4.0, "center.x = {}", center.x);
    assert!((center.y - 100.0).abs() < 4.0, "center.y = {}", center.y);
}

#[test]
fn out_of_range_colors_produce_nothing() {
    let mut frame = backdrop(320, 240);
    draw_filled_rect_mut(&mut frame, Rect::at(50, 50).of_size(100, 100), Rgb([200, 30, 30]));

    let detection = QuadDetector::new(QuadParams::default()).detect(&frame, &pastel_range());
    assert!(detection.quads.is_empty());
    assert!(detection.mask.pixels().all(|p| p[0] == 0));
}
