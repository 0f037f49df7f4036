use geo::Area;
use geo_types::{Coord, LineString, Polygon};
use image::{GrayImage, RgbImage};
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;
use log::debug;
use nalgebra::Point2;

use quad_gauge_core::HsvRange;

use crate::mask::{clean_mask, hsv_mask};
use crate::params::QuadParams;
use crate::quad::DetectedQuad;

/// Stateless color-keyed quadrilateral detector.
pub struct QuadDetector {
    params: QuadParams,
}

/// Per-frame detection output.
///
/// `quads` follows contour-discovery order. No geometric ordering is
/// guaranteed and no identity links shapes across frames, so the position
/// of a given physical shape within the list may change from frame to
/// frame. The cleaned mask is included for preview rendering; it is not
/// part of the detection contract.
pub struct QuadDetection {
    pub quads: Vec<DetectedQuad>,
    pub mask: GrayImage,
}

impl QuadDetector {
    pub fn new(params: QuadParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QuadParams {
        &self.params
    }

    /// Run the full pipeline on one frame. Independent of any previous
    /// invocation.
    pub fn detect(&self, frame: &RgbImage, range: &HsvRange) -> QuadDetection {
        let mask = clean_mask(
            &hsv_mask(frame, range),
            self.params.morph_radius,
            self.params.dilate_passes,
        );

        let contours: Vec<Contour<i32>> = find_contours(&mask);
        let mut quads = Vec::new();

        for contour in &contours {
            // External contours only; nested structure is ignored.
            if contour.border_type != BorderType::Outer || contour.parent.is_some() {
                continue;
            }

            let area = contour_area(&contour.points);
            if area < self.params.min_area {
                continue;
            }

            let perimeter = arc_length(&contour.points, true);
            let approx = approximate_polygon_dp(
                &contour.points,
                self.params.approx_tolerance * perimeter,
                true,
            );

            if approx.len() < self.params.min_vertices || approx.len() > self.params.max_vertices {
                debug!(
                    "contour rejected: area {area:.0} px², {} vertices",
                    approx.len()
                );
                continue;
            }

            debug!("quad accepted: area {area:.0} px², {} vertices", approx.len());
            quads.push(DetectedQuad::new(
                approx
                    .iter()
                    .map(|p| Point2::new(p.x as f32, p.y as f32))
                    .collect(),
            ));
        }

        QuadDetection { quads, mask }
    }
}

/// Area enclosed by a contour ring, in pixel².
fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let ring: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();
    Polygon::new(LineString::new(ring), vec![]).unsigned_area()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contour_area_of_unit_square_ring() {
        let points = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert!((contour_area(&points) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_contours_have_zero_area() {
        assert_eq!(contour_area(&[Point::new(1, 1), Point::new(2, 2)]), 0.0);
        assert_eq!(contour_area(&[]), 0.0);
    }
}
