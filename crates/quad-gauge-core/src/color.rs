use serde::{Deserialize, Serialize};

/// Largest valid hue in the packed 8-bit encoding (half-degrees).
pub const HUE_MAX: u8 = 179;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 8-bit HSV color in the packed encoding used throughout the pipeline:
/// hue in `[0, 179]` (half-degrees), saturation and value in `[0, 255]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Errors from parsing a hex color string.
#[derive(thiserror::Error, Debug)]
pub enum HexError {
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as six lowercase hex digits, two per channel.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a hex color. A leading `#` is accepted and ignored.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(HexError::BadLength(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| HexError::BadDigit(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Convert to the packed HSV encoding (hue in half-degrees).
    pub fn to_hsv(self) -> Hsv {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h_deg = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            h: ((h_deg / 2.0).round() as u8).min(HUE_MAX),
            s: (s * 255.0).round() as u8,
            v: (max * 255.0).round() as u8,
        }
    }
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Convert back to RGB. Inverse of [`Rgb::to_hsv`] up to the rounding
    /// inherent in the packed 8-bit encoding.
    pub fn to_rgb(self) -> Rgb {
        let h_deg = self.h as f32 * 2.0;
        let s = self.s as f32 / 255.0;
        let v = self.v as f32 / 255.0;

        let c = v * s;
        let x = c * (1.0 - ((h_deg / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - c;

        let (r1, g1, b1) = match h_deg as u32 / 60 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r1 + m) * 255.0).round() as u8,
            g: ((g1 + m) * 255.0).round() as u8,
            b: ((b1 + m) * 255.0).round() as u8,
        }
    }
}
