//! HWB (hue, whiteness, blackness).

use crate::rgb::{check, sector_rgb};
use crate::{ColorResult, Rgb};
use serde::{Deserialize, Serialize};

/// An HWB color with alpha. Hue is degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hwb {
    h: f64,
    w: f64,
    b: f64,
    alpha: f64,
}

impl Hwb {
    /// Creates an HWB value. Hue wraps into [0, 360); whiteness,
    /// blackness, and alpha must lie in [0, 1].
    ///
    /// `w + b >= 1` is allowed and denotes a gray.
    pub fn new(h: f64, w: f64, b: f64, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            h: h.rem_euclid(360.0),
            w: check("w", w, 0.0, 1.0)?,
            b: check("b", b, 0.0, 1.0)?,
            alpha: check("alpha", alpha, 0.0, 1.0)?,
        })
    }

    pub(crate) fn raw(h: f64, w: f64, b: f64, alpha: f64) -> Self {
        Self { h, w, b, alpha }
    }

    /// Hue in degrees in [0, 360).
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Whiteness in [0, 1].
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Blackness in [0, 1].
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// From RGB: whiteness is the minimum channel, blackness the
    /// complement of the maximum; hue matches HSV's.
    pub(crate) fn from_rgb(rgb: &Rgb) -> Self {
        let hsv = rgb.to_hsv();
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        Self::raw(hsv.h(), r.min(g).min(b), 1.0 - r.max(g).max(b), rgb.alpha())
    }

    /// Converts to RGB.
    ///
    /// The pure hue color is scaled once into the whiteness/blackness
    /// band: `C' = (1 - w - b) * C + w`. When `w + b >= 1` the hue is
    /// irrelevant and the result collapses to gray `w / (w + b)`.
    pub fn to_rgb(&self) -> Rgb {
        if self.w + self.b >= 1.0 {
            let gray = self.w / (self.w + self.b);
            return Rgb::raw(gray, gray, gray, self.alpha, crate::rgb::default_space());
        }

        let h1 = self.h.rem_euclid(360.0) / 60.0;
        let x = 1.0 - (h1 % 2.0 - 1.0).abs();
        let (r, g, b) = sector_rgb(self.h, 1.0, x);

        let scale = 1.0 - self.w - self.b;
        Rgb::raw(
            scale * r + self.w,
            scale * g + self.w,
            scale * b + self.w,
            self.alpha,
            crate::rgb::default_space(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_hue() {
        let hwb = Hwb::new(120.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(hwb.to_rgb().to_hex(), "#00FF00");
    }

    #[test]
    fn test_gray_collapse() {
        // w + b >= 1 collapses to w / (w + b) regardless of hue
        let a = Hwb::new(10.0, 0.8, 0.4, 1.0).unwrap().to_rgb();
        let b = Hwb::new(300.0, 0.8, 0.4, 1.0).unwrap().to_rgb();
        assert_eq!(a, b);
        assert!((a.r() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(a.r(), a.g());
        assert_eq!(a.g(), a.b());
    }

    #[test]
    fn test_roundtrip_hex() {
        for hex in ["#336699", "#FFEEDD", "#2B949E", "#80C0FF"] {
            let c = Rgb::from_hex(hex).unwrap();
            assert_eq!(c.to_hwb().to_rgb().to_hex(), hex, "{hex}");
        }
    }

    #[test]
    fn test_whiteness_blackness_of_gray() {
        let hwb = Rgb::from_hex("#808080").unwrap().to_hwb();
        assert_eq!(hwb.h(), 0.0);
        assert!((hwb.w() - 128.0 / 255.0).abs() < 1e-12);
        assert!((hwb.b() - (1.0 - 128.0 / 255.0)).abs() < 1e-12);
    }
}
