//! Harmony rules: named hue-rotation patterns.

use crate::{create_color_palette, ComputedPalette};
use chroma_color::{ColorResult, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named hue-rotation pattern relating a base color to companions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyRule {
    /// The base color alone.
    Mono,
    /// One companion opposite on the wheel.
    Complementary,
    /// Two companions flanking the complement.
    SplitComplementary,
    /// Two adjacent companions.
    Analogous,
    /// Two companions at thirds of the wheel.
    Triadic,
    /// Three companions at quarters of the wheel.
    Tetradic,
}

impl HarmonyRule {
    /// Hue offsets (degrees) added to the base hue, one per companion.
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyRule::Mono => &[],
            HarmonyRule::Complementary => &[180.0],
            HarmonyRule::SplitComplementary => &[150.0, -150.0],
            HarmonyRule::Analogous => &[30.0, -30.0],
            HarmonyRule::Triadic => &[120.0, -120.0],
            HarmonyRule::Tetradic => &[90.0, 180.0, 270.0],
        }
    }

    /// Rule name as used by the picker surface.
    pub const fn name(self) -> &'static str {
        match self {
            HarmonyRule::Mono => "mono",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::SplitComplementary => "splitComplementary",
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Triadic => "triadic",
            HarmonyRule::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        [
            HarmonyRule::Mono,
            HarmonyRule::Complementary,
            HarmonyRule::SplitComplementary,
            HarmonyRule::Analogous,
            HarmonyRule::Triadic,
            HarmonyRule::Tetradic,
        ]
        .into_iter()
        .find(|r| r.name() == s)
        .ok_or(())
    }
}

/// Builds the palette family for a rule: first the base palette from the
/// seed, then one palette per hue offset, each synthesized from the seed
/// rotated in HSL.
///
/// Unknown rule names yield the base palette alone.
///
/// # Example
///
/// ```rust
/// use chroma_palette::palettes_by_rule;
///
/// let family = palettes_by_rule("#2b949e", "triadic").unwrap();
/// assert_eq!(family.len(), 3);
/// assert_eq!(family[0].colors[family[0].base_color_index].to_hex(), "#2B949E");
/// ```
pub fn palettes_by_rule(seed_hex: &str, rule: &str) -> ColorResult<Vec<ComputedPalette>> {
    let seed = Rgb::from_hex(seed_hex)?;
    let offsets = HarmonyRule::from_str(rule)
        .map(HarmonyRule::offsets)
        .unwrap_or(&[]);

    let mut family = vec![create_color_palette(seed_hex)?];
    for &offset in offsets {
        let rotated = seed.hue_rotate(offset).to_hex();
        family.push(create_color_palette(&rotated)?);
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert!(HarmonyRule::Mono.offsets().is_empty());
        assert_eq!(HarmonyRule::Complementary.offsets(), &[180.0]);
        assert_eq!(HarmonyRule::Tetradic.offsets(), &[90.0, 180.0, 270.0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "splitComplementary".parse::<HarmonyRule>().unwrap(),
            HarmonyRule::SplitComplementary
        );
        assert!("duotone".parse::<HarmonyRule>().is_err());
    }

    #[test]
    fn test_tetradic_family() {
        let family = palettes_by_rule("#2b949e", "tetradic").unwrap();
        assert_eq!(family.len(), 4);
        for p in &family {
            assert_eq!(p.colors.len(), 14);
        }
        assert_eq!(
            family[0].colors[family[0].base_color_index].to_hex(),
            "#2B949E"
        );
    }

    #[test]
    fn test_unknown_rule_is_base_only() {
        let family = palettes_by_rule("#2b949e", "duotone").unwrap();
        assert_eq!(family.len(), 1);
    }

    #[test]
    fn test_mono_is_base_only() {
        let family = palettes_by_rule("#2b949e", "mono").unwrap();
        assert_eq!(family.len(), 1);
    }
}
