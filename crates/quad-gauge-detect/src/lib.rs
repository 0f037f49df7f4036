//! Color-keyed quadrilateral detector.
//!
//! Each invocation is independent given a frame and an HSV window:
//! 1. Per-pixel HSV conversion and inclusive in-range test → binary mask.
//! 2. Erode once with a 5×5 box, then dilate twice with the same element.
//! 3. Extract external contours only (nested contours are ignored).
//! 4. Discard contours enclosing less than the minimum area (raw pixel²,
//!    so the threshold is resolution dependent).
//! 5. Douglas–Peucker approximation with tolerance at 10 % of perimeter.
//! 6. Accept polygons with 4–6 vertices.
//!
//! ## Quickstart
//!
//! ```
//! use quad_gauge_core::{Hsv, HsvRange};
//! use quad_gauge_detect::{QuadDetector, QuadParams};
//!
//! let detector = QuadDetector::new(QuadParams::default());
//! let range = HsvRange::around(Hsv::new(41, 23, 236));
//!
//! let frame = image::RgbImage::new(64, 48);
//! let detection = detector.detect(&frame, &range);
//! println!("quads: {}", detection.quads.len());
//! ```

mod detector;
mod mask;
mod params;
mod quad;

pub use detector::{QuadDetection, QuadDetector};
pub use mask::{clean_mask, hsv_mask, FOREGROUND};
pub use params::QuadParams;
pub use quad::DetectedQuad;
