use serde::{Deserialize, Serialize};

use crate::color::{Hsv, HUE_MAX};

/// Hue tolerance around the base color, in half-degrees.
pub const HUE_TOLERANCE: u8 = 20;

/// Nominal saturation tolerance. Kept to document intent only: the upper
/// saturation bound is capped at [`SATURATION_CAP`] regardless of the base
/// (see [`HsvRange::around`]), so this constant never enters the math.
pub const SATURATION_TOLERANCE: u8 = 50;

/// Value tolerance below the base; the upper value bound is always 255.
pub const VALUE_TOLERANCE: u8 = 70;

/// Hard cap on the upper saturation bound.
pub const SATURATION_CAP: u8 = 100;

/// Inclusive per-channel HSV window used to build the detection mask.
///
/// Invariant: `lower <= upper` on every channel, hue within `[0, 179]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    /// Build the detection window around a sampled base color.
    ///
    /// Hue spans ±[`HUE_TOLERANCE`] around the base hue, clamped to the
    /// domain. Saturation always spans `[0, 100]` and value spans
    /// `[max(0, v − 70), 255]`: the upper saturation and value bounds
    /// ignore the base color entirely. The asymmetry is intentional — it
    /// admits pastel, washed-out targets under uneven lighting — but
    /// callers should be aware that a highly saturated base still yields
    /// an upper saturation bound of 100.
    pub fn around(base: Hsv) -> Self {
        let lower = Hsv {
            h: base.h.saturating_sub(HUE_TOLERANCE),
            s: 0,
            v: base.v.saturating_sub(VALUE_TOLERANCE),
        };
        let upper = Hsv {
            h: base.h.saturating_add(HUE_TOLERANCE).min(HUE_MAX),
            s: SATURATION_CAP,
            v: u8::MAX,
        };
        Self { lower, upper }
    }

    /// Inclusive containment test on all three channels.
    #[inline]
    pub fn contains(&self, c: Hsv) -> bool {
        c.h >= self.lower.h
            && c.h <= self.upper.h
            && c.s >= self.lower.s
            && c.s <= self.upper.s
            && c.v >= self.lower.v
            && c.v <= self.upper.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_base_produces_documented_window() {
        let range = HsvRange::around(Hsv::new(41, 23, 236));
        assert_eq!(range.lower, Hsv::new(21, 0, 166));
        assert_eq!(range.upper, Hsv::new(61, 100, 255));
    }

    #[test]
    fn window_is_ordered_and_in_domain_for_any_base() {
        for h in (0..=HUE_MAX).step_by(7) {
            for s in (0..=255u16).step_by(31) {
                for v in (0..=255u16).step_by(31) {
                    let range = HsvRange::around(Hsv::new(h, s as u8, v as u8));
                    assert!(range.lower.h <= range.upper.h);
                    assert!(range.lower.s <= range.upper.s);
                    assert!(range.lower.v <= range.upper.v);
                    assert!(range.upper.h <= HUE_MAX);
                }
            }
        }
    }

    #[test]
    fn domain_extremes_clamp_without_overflow() {
        let top = HsvRange::around(Hsv::new(HUE_MAX, 255, 255));
        assert_eq!(top.upper.h, HUE_MAX);
        assert_eq!(top.upper.v, 255);
        assert_eq!(top.lower.v, 185);

        let bottom = HsvRange::around(Hsv::new(0, 0, 0));
        assert_eq!(bottom.lower, Hsv::new(0, 0, 0));
    }

    #[test]
    fn construction_is_idempotent() {
        let base = Hsv::new(90, 200, 120);
        assert_eq!(HsvRange::around(base), HsvRange::around(base));
    }

    #[test]
    fn upper_saturation_ignores_base() {
        // Documented asymmetry: even a fully saturated base keeps the cap.
        let range = HsvRange::around(Hsv::new(10, 255, 128));
        assert_eq!(range.upper.s, SATURATION_CAP);
    }

    #[test]
    fn containment_is_inclusive_at_both_bounds() {
        let range = HsvRange::around(Hsv::new(41, 23, 236));
        assert!(range.contains(range.lower));
        assert!(range.contains(range.upper));
        assert!(!range.contains(Hsv::new(range.upper.h + 1, 50, 200)));
    }
}
