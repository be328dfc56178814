//! HSV (hue, saturation, value).

use crate::rgb::{check, hue_deg, sector_rgb};
use crate::{ColorResult, Rgb};
use serde::{Deserialize, Serialize};

/// An HSV color with alpha. Hue is degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
    alpha: f64,
}

impl Hsv {
    /// Creates an HSV value. Hue wraps into [0, 360); saturation, value,
    /// and alpha must lie in [0, 1].
    pub fn new(h: f64, s: f64, v: f64, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            h: h.rem_euclid(360.0),
            s: check("s", s, 0.0, 1.0)?,
            v: check("v", v, 0.0, 1.0)?,
            alpha: check("alpha", alpha, 0.0, 1.0)?,
        })
    }

    pub(crate) fn raw(h: f64, s: f64, v: f64, alpha: f64) -> Self {
        Self { h, s, v, alpha }
    }

    /// Hue in degrees in [0, 360).
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation in [0, 1].
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value in [0, 1].
    #[inline]
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// From RGB extrema. Gray inputs report hue 0 and saturation 0; the
    /// reported hue is a whole number of degrees.
    pub(crate) fn from_rgb(rgb: &Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        Self::raw(hue_deg(r, g, b, max, delta), s, max, rgb.alpha())
    }

    /// Converts to RGB via hexcone sector selection.
    pub fn to_rgb(&self) -> Rgb {
        let c = self.v * self.s;
        let h1 = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h1 % 2.0 - 1.0).abs());
        let m = self.v - c;
        let (r, g, b) = sector_rgb(self.h, c, x);
        Rgb::raw(r + m, g + m, b + m, self.alpha, crate::rgb::default_space())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let red = Rgb::from_hex("#FF0000").unwrap().to_hsv();
        assert_eq!((red.h(), red.s(), red.v()), (0.0, 1.0, 1.0));
        let green = Rgb::from_hex("#00FF00").unwrap().to_hsv();
        assert_eq!(green.h(), 120.0);
        let blue = Rgb::from_hex("#0000FF").unwrap().to_hsv();
        assert_eq!(blue.h(), 240.0);
    }

    #[test]
    fn test_gray_has_zero_hue_and_saturation() {
        let gray = Rgb::from_hex("#7F7F7F").unwrap().to_hsv();
        assert_eq!(gray.h(), 0.0);
        assert_eq!(gray.s(), 0.0);
    }

    #[test]
    fn test_hue_is_integral() {
        for hex in ["#2B949E", "#F44336", "#ABCDEF", "#123456", "#DEADBE"] {
            let hsv = Rgb::from_hex(hex).unwrap().to_hsv();
            assert_eq!(hsv.h(), hsv.h().round(), "{hex}");
            assert!(hsv.h() >= 0.0 && hsv.h() < 360.0, "{hex}");
        }
    }

    #[test]
    fn test_wrap_at_360() {
        let a = Hsv::new(360.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(a.h(), 0.0);
        assert_eq!(a.to_rgb().to_hex(), "#FF0000");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Hsv::new(0.0, 1.5, 1.0, 1.0).is_err());
        assert!(Hsv::new(0.0, 0.5, -0.1, 1.0).is_err());
    }
}
