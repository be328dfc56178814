//! HSL (hue, saturation, lightness).

use crate::rgb::{check, hue_deg, sector_rgb};
use crate::{ColorResult, Rgb};
use serde::{Deserialize, Serialize};

/// An HSL color with alpha. Hue is degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
    alpha: f64,
}

impl Hsl {
    /// Creates an HSL value. Hue wraps into [0, 360); saturation,
    /// lightness, and alpha must lie in [0, 1].
    pub fn new(h: f64, s: f64, l: f64, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            h: h.rem_euclid(360.0),
            s: check("s", s, 0.0, 1.0)?,
            l: check("l", l, 0.0, 1.0)?,
            alpha: check("alpha", alpha, 0.0, 1.0)?,
        })
    }

    pub(crate) fn raw(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self { h, s, l, alpha }
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

    /// Lightness in [0, 1].
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with the hue replaced (wrapped into [0, 360)).
    pub fn with_hue(&self, h: f64) -> Self {
        Self::raw(h.rem_euclid(360.0), self.s, self.l, self.alpha)
    }

    pub(crate) fn from_rgb(rgb: &Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        Self::raw(hue_deg(r, g, b, max, delta), s, l, rgb.alpha())
    }

    /// Converts to RGB via hexcone sector selection.
    pub fn to_rgb(&self) -> Rgb {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h1 = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h1 % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;
        let (r, g, b) = sector_rgb(self.h, c, x);
        Rgb::raw(r + m, g + m, b + m, self.alpha, crate::rgb::default_space())
    }

    /// CSS `hsla(H, S%, L%, A)` string with rounded integer percentages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_color::Rgb;
    ///
    /// let hsl = Rgb::new(0.2, 0.3, 0.5, 1.0).unwrap().to_hsl();
    /// assert_eq!(hsl.to_css(), "hsla(220, 43%, 35%, 1)");
    /// ```
    pub fn to_css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.l * 100.0).round(),
            self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        let hsl = Rgb::new(0.2, 0.3, 0.5, 1.0).unwrap().to_hsl();
        assert_eq!(hsl.h(), 220.0);
        assert!((hsl.s() - 3.0 / 7.0).abs() < 1e-12);
        assert!((hsl.l() - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_gray() {
        let hsl = Rgb::from_hex("#808080").unwrap().to_hsl();
        assert_eq!(hsl.h(), 0.0);
        assert_eq!(hsl.s(), 0.0);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Rgb::from_hex("#FFF").unwrap().to_hsl().l(), 1.0);
        assert_eq!(Rgb::from_hex("#000").unwrap().to_hsl().l(), 0.0);
    }

    #[test]
    fn test_roundtrip_hex() {
        for hex in ["#336699", "#FFEEDD", "#2B949E", "#F44336"] {
            let c = Rgb::from_hex(hex).unwrap();
            assert_eq!(c.to_hsl().to_rgb().to_hex(), hex, "{hex}");
        }
    }

    #[test]
    fn test_with_hue_wraps() {
        let hsl = Hsl::new(350.0, 0.5, 0.5, 1.0).unwrap();
        assert_eq!(hsl.with_hue(370.0).h(), 10.0);
        assert_eq!(hsl.with_hue(-10.0).h(), 350.0);
    }
}
