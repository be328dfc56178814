//! Cylindrical forms of Lab and Luv.

use crate::{ColorResult, Lab, Luv, Rgb};
use chroma_cie::WhitepointMeta;

/// LCH over CIELAB: lightness, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchAb {
    l: f64,
    c: f64,
    h: f64,
    alpha: f64,
    whitepoint: WhitepointMeta,
}

impl LchAb {
    /// Creates an LCH(ab) value; hue is wrapped into [0, 360), chroma is
    /// kept non-negative.
    pub fn new(l: f64, c: f64, h: f64, alpha: f64, whitepoint: WhitepointMeta) -> Self {
        Self {
            l,
            c: c.max(0.0),
            h: h.rem_euclid(360.0),
            alpha,
            whitepoint,
        }
    }

    /// Lightness.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Chroma (>= 0).
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Hue in degrees in [0, 360).
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
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

    /// Returns a copy rotated by `deg`; the hue wraps.
    pub fn rotated(&self, deg: f64) -> Self {
        Self::new(self.l, self.c, self.h + deg, self.alpha, self.whitepoint)
    }

    /// Converts back to the cartesian Lab form.
    pub fn to_lab(&self) -> Lab {
        let hr = self.h.to_radians();
        Lab::new(
            self.l,
            self.c * hr.cos(),
            self.c * hr.sin(),
            self.alpha,
            self.whitepoint,
        )
    }

    /// Converts to sRGB.
    pub fn to_rgb(&self) -> ColorResult<Rgb> {
        self.to_lab().to_rgb()
    }
}

/// LCH over CIELUV: lightness, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchUv {
    l: f64,
    c: f64,
    h: f64,
    alpha: f64,
    whitepoint: WhitepointMeta,
}

impl LchUv {
    /// Creates an LCH(uv) value; hue is wrapped into [0, 360), chroma is
    /// kept non-negative.
    pub fn new(l: f64, c: f64, h: f64, alpha: f64, whitepoint: WhitepointMeta) -> Self {
        Self {
            l,
            c: c.max(0.0),
            h: h.rem_euclid(360.0),
            alpha,
            whitepoint,
        }
    }

    /// Lightness.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Chroma (>= 0).
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Hue in degrees in [0, 360).
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
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

    /// Converts back to the cartesian Luv form.
    pub fn to_luv(&self) -> Luv {
        let hr = self.h.to_radians();
        Luv::new(
            self.l,
            self.c * hr.cos(),
            self.c * hr.sin(),
            self.alpha,
            self.whitepoint,
        )
    }

    /// Converts to sRGB.
    pub fn to_rgb(&self) -> ColorResult<Rgb> {
        self.to_luv().to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_lch_roundtrip() {
        for hex in ["#2B949E", "#F44336", "#FFEB3B", "#123456"] {
            let lab = Rgb::from_hex(hex).unwrap().to_lab().unwrap();
            let back = lab.to_lchab().to_lab();
            assert!((back.a() - lab.a()).abs() < 1e-10, "{hex}");
            assert!((back.b() - lab.b()).abs() < 1e-10, "{hex}");
        }
    }

    #[test]
    fn test_hue_wraps() {
        let lab = Rgb::from_hex("#F44336").unwrap().to_lab().unwrap();
        let lch = lab.to_lchab();
        let spun = lch.rotated(720.0);
        assert!((spun.h() - lch.h()).abs() < 1e-9);
        let neg = lch.rotated(-400.0);
        assert!(neg.h() >= 0.0 && neg.h() < 360.0);
    }

    #[test]
    fn test_negative_chroma_clamps() {
        use chroma_cie::{Illuminant, WhitepointMeta};
        let lch = LchAb::new(50.0, -5.0, 10.0, 1.0, WhitepointMeta::new(Illuminant::D65));
        assert_eq!(lch.c(), 0.0);
    }

    #[test]
    fn test_luv_lch_roundtrip() {
        let luv = Rgb::from_hex("#80C0FF").unwrap().to_luv().unwrap();
        let back = luv.to_lchuv().to_luv();
        assert!((back.u() - luv.u()).abs() < 1e-10);
        assert!((back.v() - luv.v()).abs() < 1e-10);
    }
}
