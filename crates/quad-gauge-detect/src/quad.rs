use imageproc::geometry::min_area_rect;
use imageproc::point::Point;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One accepted quadrilateral, valid only for the frame it was detected
/// in. Nothing links a quad to "the same" quad in another frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedQuad {
    /// Polygon vertices in traversal order, frame-pixel coordinates.
    pub vertices: Vec<Point2<f32>>,
}

impl DetectedQuad {
    pub fn new(vertices: Vec<Point2<f32>>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices }
    }

    /// Center as the mean of the vertices.
    pub fn center(&self) -> Point2<f32> {
        let n = self.vertices.len() as f32;
        let (x, y) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        Point2::new(x / n, y / n)
    }

    /// Side lengths `(shorter, longer)` of the minimal-area bounding
    /// rectangle.
    ///
    /// Vertices come from integer contour coordinates, so rounding to the
    /// integer grid for the rotating-calipers step loses nothing.
    pub fn min_rect_sides(&self) -> (f32, f32) {
        let points: Vec<Point<i32>> = self
            .vertices
            .iter()
            .map(|p| Point::new(p.x.round() as i32, p.y.round() as i32))
            .collect();
        let rect = min_area_rect(&points);
        let a = side_length(rect[0], rect[1]);
        let b = side_length(rect[1], rect[2]);
        (a.min(b), a.max(b))
    }
}

fn side_length(p: Point<i32>, q: Point<i32>) -> f32 {
    let dx = (p.x - q.x) as f32;
    let dy = (p.y - q.y) as f32;
    (dx * dx + dy * dy).sqrt()
}
