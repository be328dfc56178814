//! CIELAB.
//!
//! Uses the CIE 2004 rational constants kappa = 24389/27 and
//! epsilon = 216/24389 so the cube-root and linear branches meet exactly.

use crate::{ColorResult, LchAb, Rgb, Xyz};
use chroma_cie::WhitepointMeta;

/// kappa = 24389/27 (CIE 2004).
pub(crate) const KAPPA: f64 = 24389.0 / 27.0;

/// epsilon = 216/24389 (CIE 2004).
pub(crate) const EPSILON: f64 = 216.0 / 24389.0;

/// A CIELAB color with alpha and its reference white.
///
/// L may exceed 100 for inputs brighter than the reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    l: f64,
    a: f64,
    b: f64,
    alpha: f64,
    whitepoint: WhitepointMeta,
}

impl Lab {
    /// Creates a Lab value against an explicit reference white.
    pub fn new(l: f64, a: f64, b: f64, alpha: f64, whitepoint: WhitepointMeta) -> Self {
        Self { l, a, b, alpha, whitepoint }
    }

    /// Lightness.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Green-red opponent axis.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Blue-yellow opponent axis.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Reference white metadata.
    #[inline]
    pub fn whitepoint(&self) -> &WhitepointMeta {
        &self.whitepoint
    }

    pub(crate) fn from_xyz(xyz: &Xyz) -> Self {
        let wp = xyz.whitepoint().resolve();

        let f = |t: f64| -> f64 {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };

        let fx = f(xyz.x() / wp.x);
        let fy = f(xyz.y() / wp.y);
        let fz = f(xyz.z() / wp.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: xyz.alpha(),
            whitepoint: *xyz.whitepoint(),
        }
    }

    /// Converts back to XYZ against the carried reference white.
    pub fn to_xyz(&self) -> Xyz {
        let wp = self.whitepoint.resolve();

        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let xr = if fx * fx * fx > EPSILON {
            fx * fx * fx
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let yr = if self.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            self.l / KAPPA
        };
        let zr = if fz * fz * fz > EPSILON {
            fz * fz * fz
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        Xyz::raw(xr * wp.x, yr * wp.y, zr * wp.z, self.alpha, self.whitepoint)
    }

    /// Converts to the cylindrical LCH(ab) form.
    ///
    /// Hue is `atan2(b, a)` in degrees, folded into [0, 360).
    pub fn to_lchab(&self) -> LchAb {
        let c = self.a.hypot(self.b);
        let h = self.b.atan2(self.a).to_degrees().rem_euclid(360.0);
        LchAb::new(self.l, c, h, self.alpha, self.whitepoint)
    }

    /// Converts to sRGB.
    pub fn to_rgb(&self) -> ColorResult<Rgb> {
        self.to_xyz().to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_cie::Illuminant;

    fn d65() -> WhitepointMeta {
        WhitepointMeta::new(Illuminant::D65)
    }

    #[test]
    fn test_constants_exact() {
        assert_eq!(KAPPA * EPSILON, 8.0);
    }

    #[test]
    fn test_white_is_l100() {
        let lab = Rgb::from_hex("#FFF").unwrap().to_lab().unwrap();
        assert!((lab.l() - 100.0).abs() < 1e-4);
        assert!(lab.a().abs() < 1e-4);
        assert!(lab.b().abs() < 1e-4);
    }

    #[test]
    fn test_black_is_l0() {
        let lab = Rgb::from_hex("#000").unwrap().to_lab().unwrap();
        assert_eq!(lab.l(), 0.0);
    }

    #[test]
    fn test_xyz_roundtrip() {
        for hex in ["#2B949E", "#F44336", "#10FF80", "#010101"] {
            let xyz = Rgb::from_hex(hex).unwrap().to_xyz().unwrap();
            let back = xyz.to_lab().to_xyz();
            assert!((back.x() - xyz.x()).abs() < 1e-12, "{hex}");
            assert!((back.y() - xyz.y()).abs() < 1e-12, "{hex}");
            assert!((back.z() - xyz.z()).abs() < 1e-12, "{hex}");
        }
    }

    #[test]
    fn test_near_black_uses_linear_branch() {
        let lab = Lab::new(1.0, 0.0, 0.0, 1.0, d65());
        let xyz = lab.to_xyz();
        // L = 1 is below kappa*epsilon = 8, so Y = L/kappa
        assert!((xyz.y() - 1.0 / KAPPA).abs() < 1e-15);
    }
}
