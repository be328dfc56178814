//! HSI (hue, saturation, intensity).
//!
//! The intensity model: I is the channel mean, S the normalized distance
//! from gray, and hue the geometric angle in the RGB plane. Unlike the
//! hexcone models the hue here keeps full precision.

use crate::rgb::check;
use crate::{ColorResult, Rgb};
use serde::{Deserialize, Serialize};

/// An HSI color with alpha. Hue is degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsi {
    h: f64,
    s: f64,
    i: f64,
    alpha: f64,
}

impl Hsi {
    /// Creates an HSI value. Hue wraps into [0, 360); saturation,
    /// intensity, and alpha must lie in [0, 1].
    pub fn new(h: f64, s: f64, i: f64, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            h: h.rem_euclid(360.0),
            s: check("s", s, 0.0, 1.0)?,
            i: check("i", i, 0.0, 1.0)?,
            alpha: check("alpha", alpha, 0.0, 1.0)?,
        })
    }

    pub(crate) fn raw(h: f64, s: f64, i: f64, alpha: f64) -> Self {
        Self { h, s, i, alpha }
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

    /// Intensity in [0, 1].
    #[inline]
    pub fn i(&self) -> f64 {
        self.i
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub(crate) fn from_rgb(rgb: &Rgb) -> Self {
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        let i = (r + g + b) / 3.0;
        if i == 0.0 {
            return Self::raw(0.0, 0.0, 0.0, rgb.alpha());
        }

        let min = r.min(g).min(b);
        let s = 1.0 - min / i;
        if s == 0.0 {
            return Self::raw(0.0, 0.0, i, rgb.alpha());
        }

        let num = 0.5 * ((r - g) + (r - b));
        let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
        let h = if den == 0.0 {
            0.0
        } else {
            let theta = (num / den).clamp(-1.0, 1.0).acos().to_degrees();
            if b <= g {
                theta
            } else {
                360.0 - theta
            }
        };
        Self::raw(h.rem_euclid(360.0), s, i, rgb.alpha())
    }

    /// Converts to RGB via the 120-degree sector formulas.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(360.0);

        let sector = |h: f64| -> (f64, f64, f64) {
            let hr = h.to_radians();
            let low = self.i * (1.0 - self.s);
            let high = self.i * (1.0 + self.s * hr.cos() / (60.0_f64.to_radians() - hr).cos());
            let rest = 3.0 * self.i - low - high;
            (low, high, rest)
        };

        let (r, g, b) = if h < 120.0 {
            let (low, high, rest) = sector(h);
            (high, rest, low)
        } else if h < 240.0 {
            let (low, high, rest) = sector(h - 120.0);
            (low, high, rest)
        } else {
            let (low, high, rest) = sector(h - 240.0);
            (rest, low, high)
        };
        Rgb::raw(
            r.clamp(0.0, 1.0),
            g.clamp(0.0, 1.0),
            b.clamp(0.0, 1.0),
            self.alpha,
            crate::rgb::default_space(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_gray() {
        let black = Rgb::from_hex("#000").unwrap().to_hsi();
        assert_eq!((black.h(), black.s(), black.i()), (0.0, 0.0, 0.0));

        let gray = Rgb::from_hex("#808080").unwrap().to_hsi();
        assert_eq!(gray.h(), 0.0);
        assert_eq!(gray.s(), 0.0);
        assert!((gray.i() - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_primary_intensity() {
        let red = Rgb::from_hex("#FF0000").unwrap().to_hsi();
        assert_eq!(red.h(), 0.0);
        assert_eq!(red.s(), 1.0);
        assert!((red.i() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_hex() {
        for hex in ["#2B949E", "#F44336", "#336699", "#DEADBE", "#01FE80"] {
            let c = Rgb::from_hex(hex).unwrap();
            assert_eq!(c.to_hsi().to_rgb().to_hex(), hex, "{hex}");
        }
    }

    #[test]
    fn test_blue_sector() {
        let blue = Rgb::from_hex("#0000FF").unwrap().to_hsi();
        assert_eq!(blue.h(), 240.0);
        assert_eq!(blue.to_rgb().to_hex(), "#0000FF");
    }
}
