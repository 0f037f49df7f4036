use serde::{Deserialize, Serialize};

/// Parameters of the quad detector.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuadParams {
    /// Radius of the square morphology element (2 → a 5×5 box).
    pub morph_radius: u8,

    /// Dilation passes applied after the single erosion.
    pub dilate_passes: u32,

    /// Contours enclosing less area than this are discarded.
    ///
    /// Raw pixel², so the effective physical threshold changes with
    /// capture resolution.
    pub min_area: f64,

    /// Polygon approximation tolerance as a fraction of contour
    /// perimeter. Deliberately coarse to tolerate imperfect silhouettes.
    pub approx_tolerance: f64,

    /// Accepted vertex counts, inclusive. Squares approximate to 4; the
    /// slack up to 6 absorbs approximation noise.
    pub min_vertices: usize,
    pub max_vertices: usize,
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            morph_radius: 2,
            dilate_passes: 2,
            min_area: 1000.0,
            approx_tolerance: 0.1,
            min_vertices: 4,
            max_vertices: 6,
        }
    }
}
