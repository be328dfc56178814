//! The [`RgbSpace`] type and its XYZ transforms.
//!
//! # Matrix derivation
//!
//! With P the 3x3 matrix whose columns are the primaries' XYZ and W the
//! whitepoint, the per-primary scale is `S = P^-1 * W` and
//!
//! ```text
//! to_xyz = P * diag(S)        to_rgb = to_xyz^-1
//! ```
//!
//! so that RGB (1, 1, 1) maps exactly onto the whitepoint. Matrices are
//! rounded elementwise to 8 decimals by default and cached on first use.

use crate::{SpaceError, SpaceResult};
use chroma_cie::{adaptation_matrix, xy_to_xyz, WhitepointMeta, DEFAULT_METHOD};
use chroma_math::{Mat3, Vec3};
use std::sync::OnceLock;
use tracing::debug;

/// Default decimal rounding applied to derived matrices.
pub const DEFAULT_MATRIX_DIGITS: i32 = 8;

/// Disables matrix rounding when passed as the digits argument.
pub const UNROUNDED: i32 = -1;

/// The derived RGB/XYZ matrix pair of a working space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrices {
    /// Linear RGB to XYZ.
    pub to_xyz: Mat3,
    /// XYZ to linear RGB.
    pub to_rgb: Mat3,
}

/// An RGB working space.
///
/// Instances are immutable; the matrix pair is derived lazily and memoized.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::space;
///
/// let srgb = space("sRGB").unwrap();
/// let m = srgb.transform_matrices().unwrap();
/// assert!((m.to_xyz.m[1][0] - 0.21267285).abs() < 1e-8);
/// ```
#[derive(Debug)]
pub struct RgbSpace {
    name: &'static str,
    primaries: [Vec3; 3],
    whitepoint_meta: WhitepointMeta,
    whitepoint: Vec3,
    eotf: fn(f64) -> f64,
    oetf: fn(f64) -> f64,
    matrices: OnceLock<TransformMatrices>,
}

impl RgbSpace {
    /// Builds a space from xy chromaticities of the primaries.
    ///
    /// The whitepoint is resolved from `whitepoint_meta` once, up front.
    /// All primaries must resolve to strictly positive Y.
    pub fn from_chromaticities(
        name: &'static str,
        r: (f64, f64),
        g: (f64, f64),
        b: (f64, f64),
        whitepoint_meta: WhitepointMeta,
        eotf: fn(f64) -> f64,
        oetf: fn(f64) -> f64,
    ) -> Self {
        Self {
            name,
            primaries: [
                xy_to_xyz(r.0, r.1),
                xy_to_xyz(g.0, g.1),
                xy_to_xyz(b.0, b.1),
            ],
            whitepoint: whitepoint_meta.resolve(),
            whitepoint_meta,
            eotf,
            oetf,
            matrices: OnceLock::new(),
        }
    }

    /// Space name as registered.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// XYZ of the R, G, B primaries.
    #[inline]
    pub fn primaries(&self) -> &[Vec3; 3] {
        &self.primaries
    }

    /// Resolved reference whitepoint (Y = 1).
    #[inline]
    pub fn whitepoint(&self) -> Vec3 {
        self.whitepoint
    }

    /// The whitepoint meta this space was built with.
    #[inline]
    pub fn whitepoint_meta(&self) -> &WhitepointMeta {
        &self.whitepoint_meta
    }

    /// Decodes one encoded channel to linear light.
    #[inline]
    pub fn to_linear(&self, v: f64) -> f64 {
        (self.eotf)(v)
    }

    /// Encodes one linear channel.
    #[inline]
    pub fn to_gamma(&self, v: f64) -> f64 {
        (self.oetf)(v)
    }

    fn derive_matrices(&self, digits: i32) -> SpaceResult<TransformMatrices> {
        let [r, g, b] = self.primaries;
        let p = Mat3::from_col_vecs(r, g, b);
        let p_inv = p
            .inverse()
            .ok_or_else(|| SpaceError::Singular(format!("primaries of '{}'", self.name)))?;
        let s = p_inv * self.whitepoint;
        let to_xyz = Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z);
        let to_rgb = to_xyz
            .inverse()
            .ok_or_else(|| SpaceError::Singular(format!("to_xyz of '{}'", self.name)))?;
        if digits >= 4 {
            Ok(TransformMatrices {
                to_xyz: to_xyz.rounded(digits),
                to_rgb: to_rgb.rounded(digits),
            })
        } else {
            Ok(TransformMatrices { to_xyz, to_rgb })
        }
    }

    /// The memoized `{to_xyz, to_rgb}` pair at the default rounding.
    pub fn transform_matrices(&self) -> SpaceResult<&TransformMatrices> {
        if let Some(m) = self.matrices.get() {
            return Ok(m);
        }
        debug!(space = self.name, "deriving RGB/XYZ matrices");
        let computed = self.derive_matrices(DEFAULT_MATRIX_DIGITS)?;
        Ok(self.matrices.get_or_init(|| computed))
    }

    /// Derives the matrix pair at an explicit rounding; bypasses the cache.
    ///
    /// `digits >= 4` rounds elementwise; [`UNROUNDED`] keeps full precision.
    pub fn transform_matrices_with(&self, digits: i32) -> SpaceResult<TransformMatrices> {
        self.derive_matrices(digits)
    }

    /// Converts XYZ to this space's encoded RGB.
    ///
    /// When `src` names a whitepoint other than this space's own, the
    /// tristimulus is first chromatically adapted (Bradford). Channels are
    /// gamma-encoded and clamped to [0, 1]; the clamp exists to hide
    /// sub-ULP overshoot, not to gamut-map.
    pub fn xyz_to_rgb(&self, xyz: Vec3, src: Option<&WhitepointMeta>) -> SpaceResult<Vec3> {
        let mut xyz = xyz;
        if let Some(src) = src {
            if src != &self.whitepoint_meta {
                xyz = adaptation_matrix(src, &self.whitepoint_meta, DEFAULT_METHOD)? * xyz;
            }
        }
        let linear = self.transform_matrices()?.to_rgb * xyz;
        Ok(linear.map(|v| self.to_gamma(v).clamp(0.0, 1.0)))
    }

    /// Converts this space's encoded RGB to XYZ.
    ///
    /// Channels are linearized without clamping (out-of-gamut values
    /// survive); `dst` optionally adapts the result to another whitepoint.
    pub fn rgb_to_xyz(&self, rgb: Vec3, dst: Option<&WhitepointMeta>) -> SpaceResult<Vec3> {
        let linear = rgb.map(|v| self.to_linear(v));
        let mut xyz = self.transform_matrices()?.to_xyz * linear;
        if let Some(dst) = dst {
            if dst != &self.whitepoint_meta {
                xyz = adaptation_matrix(&self.whitepoint_meta, dst, DEFAULT_METHOD)? * xyz;
            }
        }
        Ok(xyz)
    }

    /// Composite matrix from this space's linear RGB to another space's
    /// linear RGB, adapting between whitepoints under `method`.
    ///
    /// Gamma handling is the caller's responsibility in this chained form.
    pub fn conversion_matrix(&self, target: &RgbSpace, method: &str) -> SpaceResult<Mat3> {
        let to_xyz = self.transform_matrices()?.to_xyz;
        let to_rgb = target.transform_matrices()?.to_rgb;
        let adapt = if self.whitepoint_meta == target.whitepoint_meta {
            Mat3::IDENTITY
        } else {
            adaptation_matrix(&self.whitepoint_meta, &target.whitepoint_meta, method)?
        };
        Ok(to_rgb * adapt * to_xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space;

    #[test]
    fn test_white_maps_to_whitepoint() {
        for name in crate::space_names() {
            let s = space(name).unwrap();
            let m = s.transform_matrices().unwrap();
            let w = m.to_xyz * Vec3::ONE;
            let wp = s.whitepoint();
            assert!((w.x - wp.x).abs() < 1e-7, "{name}");
            assert!((w.y - wp.y).abs() < 1e-7, "{name}");
            assert!((w.z - wp.z).abs() < 1e-7, "{name}");
        }
    }

    #[test]
    fn test_matrix_roundtrip() {
        let s = space("Rec.2020").unwrap();
        let m = s.transform_matrices().unwrap();
        let prod = m.to_rgb * m.to_xyz;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod.m[i][j] - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_unrounded_differs() {
        let s = space("sRGB").unwrap();
        let rounded = *s.transform_matrices().unwrap();
        let full = s.transform_matrices_with(UNROUNDED).unwrap();
        assert_ne!(rounded.to_xyz, full.to_xyz);
        assert!((rounded.to_xyz.m[0][0] - full.to_xyz.m[0][0]).abs() < 1e-8);
    }

    #[test]
    fn test_rgb_xyz_roundtrip() {
        let s = space("sRGB").unwrap();
        let rgb = Vec3::new(0.2, 0.5, 0.8);
        let xyz = s.rgb_to_xyz(rgb, None).unwrap();
        let back = s.xyz_to_rgb(xyz, None).unwrap();
        assert!((back.x - rgb.x).abs() < 1e-8);
        assert!((back.y - rgb.y).abs() < 1e-8);
        assert!((back.z - rgb.z).abs() < 1e-8);
    }

    #[test]
    fn test_conversion_matrix_same_space_is_identity() {
        let s = space("Display P3").unwrap();
        let m = s.conversion_matrix(&s, "cat02").unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m.m[i][j] - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_cross_space_preserves_whitepoint() {
        // sRGB white through the chain lands on ProPhoto white (linear domain).
        let srgb = space("sRGB").unwrap();
        let pro = space("ProPhoto RGB").unwrap();
        let m = srgb.conversion_matrix(&pro, "bradford").unwrap();
        let w = m * Vec3::ONE;
        assert!((w.x - 1.0).abs() < 1e-4);
        assert!((w.y - 1.0).abs() < 1e-4);
        assert!((w.z - 1.0).abs() < 1e-4);
    }
}
