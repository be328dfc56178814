//! The polymorphic [`Color`] sum type.

use crate::{ColorResult, Hsi, Hsl, Hsv, Hwb, Lab, LchAb, LchUv, Luv, Rgb, Xyz, Yxy};

/// Any color model, for call sites that handle models polymorphically.
///
/// The common capability set is `{to_rgb, to_xyz, to_css}`; anything finer
/// lives on the concrete types.
///
/// # Example
///
/// ```rust
/// use chroma_color::{Color, Rgb};
///
/// let colors: Vec<Color> = vec![
///     Rgb::from_hex("#2B949E").unwrap().into(),
///     Rgb::from_hex("#F44336").unwrap().to_hsl().into(),
/// ];
/// for c in &colors {
///     let _ = c.to_rgb().unwrap();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub enum Color {
    Rgb(Rgb),
    Hsv(Hsv),
    Hsl(Hsl),
    Hsi(Hsi),
    Hwb(Hwb),
    Xyz(Xyz),
    Yxy(Yxy),
    Lab(Lab),
    LchAb(LchAb),
    Luv(Luv),
    LchUv(LchUv),
}

impl Color {
    /// Converts any model to sRGB.
    pub fn to_rgb(&self) -> ColorResult<Rgb> {
        match self {
            Color::Rgb(c) => Ok(*c),
            Color::Hsv(c) => Ok(c.to_rgb()),
            Color::Hsl(c) => Ok(c.to_rgb()),
            Color::Hsi(c) => Ok(c.to_rgb()),
            Color::Hwb(c) => Ok(c.to_rgb()),
            Color::Xyz(c) => c.to_rgb(),
            Color::Yxy(c) => c.to_rgb(),
            Color::Lab(c) => c.to_rgb(),
            Color::LchAb(c) => c.to_rgb(),
            Color::Luv(c) => c.to_rgb(),
            Color::LchUv(c) => c.to_rgb(),
        }
    }

    /// Converts any model to XYZ.
    pub fn to_xyz(&self) -> ColorResult<Xyz> {
        match self {
            Color::Xyz(c) => Ok(*c),
            Color::Yxy(c) => Ok(c.to_xyz()),
            Color::Lab(c) => Ok(c.to_xyz()),
            Color::LchAb(c) => Ok(c.to_lab().to_xyz()),
            Color::Luv(c) => Ok(c.to_xyz()),
            Color::LchUv(c) => Ok(c.to_luv().to_xyz()),
            other => other.to_rgb()?.to_xyz(),
        }
    }

    /// CSS string: `hsla(...)` for HSL, `rgba(...)` for everything else.
    pub fn to_css(&self) -> ColorResult<String> {
        match self {
            Color::Hsl(c) => Ok(c.to_css()),
            other => Ok(other.to_rgb()?.to_css()),
        }
    }

    /// Alpha of the wrapped value.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgb(c) => c.alpha(),
            Color::Hsv(c) => c.alpha(),
            Color::Hsl(c) => c.alpha(),
            Color::Hsi(c) => c.alpha(),
            Color::Hwb(c) => c.alpha(),
            Color::Xyz(c) => c.alpha(),
            Color::Yxy(c) => c.alpha(),
            Color::Lab(c) => c.alpha(),
            Color::LchAb(c) => c.alpha(),
            Color::Luv(c) => c.alpha(),
            Color::LchUv(c) => c.alpha(),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl From<$ty> for Color {
            fn from(c: $ty) -> Self {
                Color::$variant(c)
            }
        })*
    };
}

impl_from! {
    Rgb => Rgb,
    Hsv => Hsv,
    Hsl => Hsl,
    Hsi => Hsi,
    Hwb => Hwb,
    Xyz => Xyz,
    Yxy => Yxy,
    Lab => Lab,
    LchAb => LchAb,
    Luv => Luv,
    LchUv => LchUv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_reach_rgb() {
        let rgb = Rgb::from_hex("#2B949E").unwrap();
        let variants: Vec<Color> = vec![
            rgb.into(),
            rgb.to_hsv().into(),
            rgb.to_hsl().into(),
            rgb.to_hsi().into(),
            rgb.to_hwb().into(),
            rgb.to_xyz().unwrap().into(),
            rgb.to_yxy().unwrap().into(),
            rgb.to_lab().unwrap().into(),
            rgb.to_lchab().unwrap().into(),
            rgb.to_luv().unwrap().into(),
            rgb.to_lchuv().unwrap().into(),
        ];
        for c in &variants {
            assert_eq!(c.to_rgb().unwrap().to_hex(), "#2B949E");
        }
    }

    #[test]
    fn test_css_dispatch() {
        let rgb = Rgb::new(0.2, 0.3, 0.5, 1.0).unwrap();
        let as_hsl: Color = rgb.to_hsl().into();
        assert_eq!(as_hsl.to_css().unwrap(), "hsla(220, 43%, 35%, 1)");
        let as_rgb: Color = rgb.into();
        assert_eq!(as_rgb.to_css().unwrap(), "rgba(51, 77, 128, 1)");
    }
}
