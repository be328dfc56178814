//! Palette tone names and light/dark classification.

use chroma_color::{contrast_ratio, ColorResult, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered tone names of the 14-tone palette.
pub const TONE_NAMES: [&str; 14] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "A100", "A200", "A400",
    "A700",
];

/// Minimum contrast against white for a color to count as dark
/// (WCAG AA large text).
pub const MIN_CONTRAST: f64 = 3.1;

/// Name of the tone at `index`, or `None` past the accent run.
///
/// # Example
///
/// ```rust
/// use chroma_palette::tone_name;
///
/// assert_eq!(tone_name(0), Some("50"));
/// assert_eq!(tone_name(10), Some("A100"));
/// assert_eq!(tone_name(14), None);
/// ```
pub fn tone_name(index: usize) -> Option<&'static str> {
    TONE_NAMES.get(index).copied()
}

/// Whether light or dark content reads better on a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// The color is light; put dark content on it.
    Light,
    /// The color is dark; put light content on it.
    Dark,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Light => "light",
            Tone::Dark => "dark",
        })
    }
}

impl FromStr for Tone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "light" => Ok(Tone::Light),
            "dark" => Ok(Tone::Dark),
            _ => Err(()),
        }
    }
}

/// Classifies a color with the default [`MIN_CONTRAST`].
pub fn color_tone(rgb: &Rgb) -> ColorResult<Tone> {
    color_tone_with(rgb, MIN_CONTRAST)
}

/// Classifies a color as light or dark.
///
/// A color is dark when it contrasts enough with white, or when it
/// contrasts no better with black than it does with white.
pub fn color_tone_with(rgb: &Rgb, min_contrast: f64) -> ColorResult<Tone> {
    let white = Rgb::new_in(rgb.space(), 1.0, 1.0, 1.0, 1.0)?;
    let black = Rgb::new_in(rgb.space(), 0.0, 0.0, 0.0, 1.0)?;
    let vs_white = contrast_ratio(rgb, &white)?;
    let vs_black = contrast_ratio(rgb, &black)?;
    if vs_white >= min_contrast || vs_black <= vs_white {
        Ok(Tone::Dark)
    } else {
        Ok(Tone::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_names() {
        assert_eq!(TONE_NAMES.len(), 14);
        assert_eq!(tone_name(9), Some("900"));
        assert_eq!(tone_name(13), Some("A700"));
        assert_eq!(tone_name(14), None);
    }

    #[test]
    fn test_extremes() {
        let white = Rgb::from_hex("#FFFFFF").unwrap();
        let black = Rgb::from_hex("#000000").unwrap();
        assert_eq!(color_tone(&white).unwrap(), Tone::Light);
        assert_eq!(color_tone(&black).unwrap(), Tone::Dark);
    }

    #[test]
    fn test_known_classifications() {
        let teal = Rgb::from_hex("#2B949E").unwrap();
        assert_eq!(color_tone(&teal).unwrap(), Tone::Dark);
        let yellow = Rgb::from_hex("#FFEB3B").unwrap();
        assert_eq!(color_tone(&yellow).unwrap(), Tone::Light);
    }

    #[test]
    fn test_parse_passthrough() {
        assert_eq!("light".parse::<Tone>().unwrap(), Tone::Light);
        assert_eq!("dark".parse::<Tone>().unwrap(), Tone::Dark);
        assert!("dim".parse::<Tone>().is_err());
    }
}
