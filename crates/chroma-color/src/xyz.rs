//! CIE XYZ, the hub of the conversion DAG.

use crate::{ColorResult, Lab, Luv, Rgb, Yxy};
use chroma_cie::{adapt, WhitepointMeta};
use chroma_math::Vec3;
use chroma_spaces::{space, DEFAULT_SPACE};

/// An XYZ tristimulus with alpha and its reference white.
///
/// Y is normalized so the reference white has Y = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
    alpha: f64,
    whitepoint: WhitepointMeta,
}

impl Xyz {
    /// Creates an XYZ value against an explicit reference white.
    pub fn new(x: f64, y: f64, z: f64, alpha: f64, whitepoint: WhitepointMeta) -> Self {
        Self { x, y, z, alpha, whitepoint }
    }

    pub(crate) fn raw(x: f64, y: f64, z: f64, alpha: f64, whitepoint: WhitepointMeta) -> Self {
        Self { x, y, z, alpha, whitepoint }
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component (luminance).
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
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

    /// Components as a vector.
    #[inline]
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Chromatically adapts to another reference white.
    pub fn adapt_to(&self, dst: WhitepointMeta, method: &str) -> ColorResult<Self> {
        let v = adapt(self.to_vec3(), &self.whitepoint, &dst, method)?;
        Ok(Self::raw(v.x, v.y, v.z, self.alpha, dst))
    }

    /// Converts to sRGB.
    pub fn to_rgb(&self) -> ColorResult<Rgb> {
        self.to_rgb_in(DEFAULT_SPACE)
    }

    /// Converts to the named working space, adapting whitepoints if needed.
    pub fn to_rgb_in(&self, name: &str) -> ColorResult<Rgb> {
        let sp = space(name)?;
        let rgb = sp.xyz_to_rgb(self.to_vec3(), Some(&self.whitepoint))?;
        Ok(Rgb::raw(rgb.x, rgb.y, rgb.z, self.alpha, sp.name()))
    }

    /// Converts to CIELAB against this value's reference white.
    pub fn to_lab(&self) -> Lab {
        Lab::from_xyz(self)
    }

    /// Converts to CIELUV against this value's reference white.
    pub fn to_luv(&self) -> Luv {
        Luv::from_xyz(self)
    }

    /// Converts to Yxy chromaticity form.
    ///
    /// Black (X + Y + Z = 0) keeps the whitepoint chromaticity so the
    /// inverse is still defined.
    pub fn to_yxy(&self) -> Yxy {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            let wp = self.whitepoint.resolve();
            let wsum = wp.x + wp.y + wp.z;
            return Yxy::raw(0.0, wp.x / wsum, wp.y / wsum, self.alpha, self.whitepoint);
        }
        Yxy::raw(self.y, self.x / sum, self.y / sum, self.alpha, self.whitepoint)
    }
}
