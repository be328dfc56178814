//! The RGB value type and the picker-facing constructor surface.

use crate::{
    format_hex, parse_hex, ColorError, ColorResult, Hsi, Hsl, Hsv, Hwb, Lab, LchAb, LchUv, Luv,
    Xyz, Yxy,
};
use chroma_spaces::{space, DEFAULT_SPACE};
use chroma_math::Vec3;
use serde::{Deserialize, Serialize};

pub(crate) fn default_space() -> &'static str {
    DEFAULT_SPACE
}

pub(crate) fn check(component: &'static str, value: f64, min: f64, max: f64) -> ColorResult<f64> {
    if !value.is_finite() || value < min || value > max {
        return Err(ColorError::OutOfRange {
            component,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// An RGB color with alpha, tagged with its working space.
///
/// Components live in [0, 1] in the space's *encoded* (gamma) domain.
/// Values are immutable; every transformation returns a new instance.
///
/// # Example
///
/// ```rust
/// use chroma_color::Rgb;
///
/// let c = Rgb::from_hex("#AA88EE").unwrap();
/// assert_eq!(c.to_values(), (170, 136, 238, 1.0));
/// assert_eq!(c.to_hex(), "#AA88EE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
    #[serde(skip, default = "default_space")]
    space: &'static str,
}

impl Rgb {
    /// Creates an sRGB color from components in [0, 1].
    ///
    /// Any component outside [0, 1] (including > 1) is rejected; nothing is
    /// silently clamped.
    pub fn new(r: f64, g: f64, b: f64, alpha: f64) -> ColorResult<Self> {
        Self::new_in(DEFAULT_SPACE, r, g, b, alpha)
    }

    /// Creates a color in the named working space.
    pub fn new_in(space: &'static str, r: f64, g: f64, b: f64, alpha: f64) -> ColorResult<Self> {
        Ok(Self {
            r: check("r", r, 0.0, 1.0)?,
            g: check("g", g, 0.0, 1.0)?,
            b: check("b", b, 0.0, 1.0)?,
            alpha: check("alpha", alpha, 0.0, 1.0)?,
            space,
        })
    }

    /// Internal constructor for values already known to be in range.
    pub(crate) fn raw(r: f64, g: f64, b: f64, alpha: f64, space: &'static str) -> Self {
        Self { r, g, b, alpha, space }
    }

    /// Parses a hex color string (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`,
    /// leading `#` optional).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_color::Rgb;
    ///
    /// let c = Rgb::from_hex("#1A2").unwrap();
    /// assert_eq!(c.to_hex(), "#11AA22");
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(s: &str) -> ColorResult<Self> {
        let [r, g, b, a] = parse_hex(s)?;
        Ok(Self::raw(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
            DEFAULT_SPACE,
        ))
    }

    /// Creates an sRGB color from 0-255 channel values.
    pub fn from_rgb255(r: f64, g: f64, b: f64, alpha: f64) -> ColorResult<Self> {
        Ok(Self::raw(
            check("r", r, 0.0, 255.0)? / 255.0,
            check("g", g, 0.0, 255.0)? / 255.0,
            check("b", b, 0.0, 255.0)? / 255.0,
            check("alpha", alpha, 0.0, 1.0)?,
            DEFAULT_SPACE,
        ))
    }

    /// Creates a color from HSV with saturation/value as percentages.
    pub fn from_hsv(h: f64, s_pct: f64, v_pct: f64, alpha: f64) -> ColorResult<Self> {
        let hsv = Hsv::new(
            h,
            check("s", s_pct, 0.0, 100.0)? / 100.0,
            check("v", v_pct, 0.0, 100.0)? / 100.0,
            alpha,
        )?;
        Ok(hsv.to_rgb())
    }

    /// Creates a color from HSL with saturation/lightness as percentages.
    pub fn from_hsl(h: f64, s_pct: f64, l_pct: f64, alpha: f64) -> ColorResult<Self> {
        let hsl = Hsl::new(
            h,
            check("s", s_pct, 0.0, 100.0)? / 100.0,
            check("l", l_pct, 0.0, 100.0)? / 100.0,
            alpha,
        )?;
        Ok(hsl.to_rgb())
    }

    /// Red component in [0, 1].
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green component in [0, 1].
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue component in [0, 1].
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Name of the working space this color is encoded in.
    #[inline]
    pub fn space(&self) -> &'static str {
        self.space
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(mut self, alpha: f64) -> ColorResult<Self> {
        self.alpha = check("alpha", alpha, 0.0, 1.0)?;
        Ok(self)
    }

    /// 0-255 channel values plus alpha.
    pub fn to_values(&self) -> (u8, u8, u8, f64) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.alpha,
        )
    }

    /// Uppercase hex string; the alpha pair is dropped when alpha is 1.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_values();
        format_hex(r, g, b, (self.alpha * 255.0).round() as u8)
    }

    /// CSS `rgba(R, G, B, A)` string with 0-255 integer channels.
    pub fn to_css(&self) -> String {
        let (r, g, b, _) = self.to_values();
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }

    /// Converts to HSV.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from_rgb(self)
    }

    /// Converts to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_rgb(self)
    }

    /// Converts to HWB.
    pub fn to_hwb(&self) -> Hwb {
        Hwb::from_rgb(self)
    }

    /// Converts to HSI.
    pub fn to_hsi(&self) -> Hsi {
        Hsi::from_rgb(self)
    }

    /// Converts to XYZ through this color's working space.
    pub fn to_xyz(&self) -> ColorResult<Xyz> {
        let sp = space(self.space)?;
        let xyz = sp.rgb_to_xyz(Vec3::new(self.r, self.g, self.b), None)?;
        Ok(Xyz::raw(xyz.x, xyz.y, xyz.z, self.alpha, *sp.whitepoint_meta()))
    }

    /// Converts to Yxy.
    pub fn to_yxy(&self) -> ColorResult<Yxy> {
        Ok(self.to_xyz()?.to_yxy())
    }

    /// Converts to CIELAB.
    pub fn to_lab(&self) -> ColorResult<Lab> {
        Ok(self.to_xyz()?.to_lab())
    }

    /// Converts to LCH(ab).
    pub fn to_lchab(&self) -> ColorResult<LchAb> {
        Ok(self.to_lab()?.to_lchab())
    }

    /// Converts to CIELUV.
    pub fn to_luv(&self) -> ColorResult<Luv> {
        Ok(self.to_xyz()?.to_luv())
    }

    /// Converts to LCH(uv).
    pub fn to_lchuv(&self) -> ColorResult<LchUv> {
        Ok(self.to_luv()?.to_lchuv())
    }

    /// Rotates the hue by `deg` (through HSL, wrapping into [0, 360)).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_color::Rgb;
    ///
    /// let red = Rgb::from_hex("#FF0000").unwrap();
    /// assert_eq!(red.hue_rotate(120.0).to_hex(), "#00FF00");
    /// ```
    pub fn hue_rotate(&self, deg: f64) -> Self {
        let hsl = self.to_hsl();
        hsl.with_hue(hsl.h() + deg).to_rgb()
    }

    /// Re-encodes this color in another working space.
    ///
    /// Linearizes, applies the composite `to_rgb * adapt * to_xyz` matrix,
    /// then gamma-encodes and clamps in the target space.
    pub fn convert_space(&self, target: &str, method: &str) -> ColorResult<Self> {
        let src = space(self.space)?;
        let dst = space(target)?;
        let m = src.conversion_matrix(&dst, method)?;
        let linear = Vec3::new(
            src.to_linear(self.r),
            src.to_linear(self.g),
            src.to_linear(self.b),
        );
        let out = (m * linear).map(|v| dst.to_gamma(v).clamp(0.0, 1.0));
        Ok(Self::raw(out.x, out.y, out.z, self.alpha, dst.name()))
    }
}

// ============================================================================
// Shared hue helpers for the cylindrical models
// ============================================================================

/// Hue in whole degrees in [0, 360) from RGB extrema; gray reports 0.
pub(crate) fn hue_deg(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (sector * 60.0).round().rem_euclid(360.0)
}

/// RGB sector selection for the hexcone models.
///
/// `h` is wrapped into [0, 360) first, so h = 360 is safe.
pub(crate) fn sector_rgb(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    let h1 = h.rem_euclid(360.0) / 60.0;
    match h1 as usize {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}
