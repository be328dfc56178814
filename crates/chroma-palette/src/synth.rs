//! The palette synthesizer.

use crate::{
    CHROMA_COMPENSATION, CHROMA_COMPENSATION_LIGHT, DARK_PALETTE, GOLDEN_PALETTES, LIGHT_PALETTE,
    LIGHTNESS_COMPENSATION,
};
use chroma_color::{delta_e_2000, ColorResult, Lab, LchAb, Rgb};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gap kept between consecutive tones' lightness.
const LIGHTNESS_STEP: f64 = 1.7;

/// Chroma below which a palette's 500 tone marks it as muted.
const MID_CHROMA_THRESHOLD: f64 = 30.0;

/// Cap on how far the chroma spread ratio may amplify the seed delta.
const CHROMA_RATIO_CAP: f64 = 1.25;

/// A synthesized tonal palette.
///
/// `colors[base_color_index]` is the seed color itself, byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedPalette {
    /// Index of the tone the seed landed on.
    pub base_color_index: usize,
    /// The tones, light to dark, accents last for the 14-tone form.
    pub colors: Vec<Rgb>,
}

/// Synthesizes a palette around `seed_hex` from the given reference
/// palettes and spread vectors.
///
/// The closest reference tone to the seed (ΔE2000 in Lab, first
/// encountered wins ties) anchors the reshaping: every other tone of the
/// winning palette is shifted by the seed-vs-anchor lightness/chroma/hue
/// deltas, scaled by the per-tone spread ratios, while a walking
/// lightness ceiling keeps consecutive tones from colliding.
pub fn create_palette(
    seed_hex: &str,
    palettes: &[&[[f64; 3]]],
    lc: &[f64],
    cc: &[f64],
) -> ColorResult<ComputedPalette> {
    let seed_rgb = Rgb::from_hex(seed_hex)?;
    let seed_lab = seed_rgb.to_lab()?;
    let seed_lch = seed_lab.to_lchab();
    let whitepoint = *seed_lab.whitepoint();
    let (l0, c0, h0) = (seed_lch.l(), seed_lch.c(), seed_lch.h());

    // Nearest reference tone across every provided palette; strict
    // less-than keeps the first encountered on ties.
    let (mut best_de, mut palette_index, mut base_index) = (f64::INFINITY, 0, 0);
    for (pi, palette) in palettes.iter().enumerate() {
        for (ci, &[l, a, b]) in palette.iter().enumerate() {
            let candidate = Lab::new(l, a, b, 1.0, whitepoint);
            let de = delta_e_2000(&candidate, &seed_lab);
            if de < best_de {
                (best_de, palette_index, base_index) = (de, pi, ci);
            }
        }
    }
    debug!(seed = seed_hex, palette_index, base_index, best_de, "anchored seed");

    let reference: Vec<LchAb> = palettes[palette_index]
        .iter()
        .map(|&[l, a, b]| Lab::new(l, a, b, 1.0, whitepoint).to_lchab())
        .collect();
    let anchor = &reference[base_index];

    let delta_l = anchor.l() - l0;
    let delta_c = anchor.c() - c0;
    let delta_h = anchor.h() - h0;
    let mid_chroma = reference
        .get(5)
        .map_or(true, |tone| tone.c() < MID_CHROMA_THRESHOLD);

    let mut max_lightness = 100.0;
    let mut colors = Vec::with_capacity(reference.len());

    for (i, tone) in reference.iter().enumerate() {
        if i == crate::ACCENT_OFFSET {
            // The accent run restarts the lightness walk.
            max_lightness = 100.0;
        }
        if i == base_index {
            colors.push(seed_rgb);
            max_lightness = (l0 - LIGHTNESS_STEP).max(0.0);
            continue;
        }

        let hue = (tone.h() - delta_h + 360.0).rem_euclid(360.0);

        let mut lightness = tone.l() - (lc[i] / lc[base_index]) * delta_l;
        lightness = lightness.min(max_lightness).clamp(0.0, 100.0);

        let chroma = if mid_chroma {
            tone.c() - delta_c
        } else {
            tone.c() - delta_c * (cc[i] / cc[base_index]).min(CHROMA_RATIO_CAP)
        };
        let chroma = chroma.max(0.0);

        let rgb = LchAb::new(lightness, chroma, hue, tone.alpha(), whitepoint).to_rgb()?;
        colors.push(rgb);

        max_lightness = (lightness - LIGHTNESS_STEP).max(0.0);
    }

    Ok(ComputedPalette { base_color_index: base_index, colors })
}

/// Synthesizes the full 14-tone palette from the golden table.
///
/// # Example
///
/// ```rust
/// use chroma_palette::create_color_palette;
///
/// let p = create_color_palette("#F44336").unwrap();
/// assert_eq!(p.colors.len(), 14);
/// assert_eq!(p.colors[p.base_color_index].to_hex(), "#F44336");
/// ```
pub fn create_color_palette(seed_hex: &str) -> ColorResult<ComputedPalette> {
    let refs: Vec<&[[f64; 3]]> = GOLDEN_PALETTES.iter().map(|p| p.as_slice()).collect();
    create_palette(
        seed_hex,
        &refs,
        &LIGHTNESS_COMPENSATION,
        &CHROMA_COMPENSATION,
    )
}

/// Synthesizes a 10-tone palette from the light neutral ramp.
pub fn create_light_palette(seed_hex: &str) -> ColorResult<ComputedPalette> {
    create_palette(
        seed_hex,
        &[LIGHT_PALETTE.as_slice()],
        &LIGHTNESS_COMPENSATION[..crate::NEUTRAL_PALETTE_SIZE],
        &CHROMA_COMPENSATION_LIGHT,
    )
}

/// Synthesizes a 10-tone palette from the dark neutral ramp.
pub fn create_dark_palette(seed_hex: &str) -> ColorResult<ComputedPalette> {
    create_palette(
        seed_hex,
        &[DARK_PALETTE.as_slice()],
        &LIGHTNESS_COMPENSATION[..crate::NEUTRAL_PALETTE_SIZE],
        &CHROMA_COMPENSATION_LIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_survives_verbatim() {
        for seed in ["#2b949e", "#F44336", "#000000", "#FFFFFF", "#808080"] {
            let p = create_color_palette(seed).unwrap();
            assert_eq!(p.colors[p.base_color_index].to_hex(), seed.to_uppercase(), "{seed}");
        }
    }

    #[test]
    fn test_full_palette_shape() {
        let p = create_color_palette("#2b949e").unwrap();
        assert_eq!(p.colors.len(), 14);
        assert!(p.base_color_index < 14);
        for c in &p.colors {
            for v in [c.r(), c.g(), c.b(), c.alpha()] {
                assert!(v.is_finite() && (0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_neutral_variants_shape() {
        let light = create_light_palette("#2b949e").unwrap();
        let dark = create_dark_palette("#2b949e").unwrap();
        assert_eq!(light.colors.len(), 10);
        assert_eq!(dark.colors.len(), 10);
    }

    #[test]
    fn test_primary_run_descends_in_lightness() {
        let p = create_color_palette("#4CAF50").unwrap();
        let labs: Vec<f64> = p
            .colors
            .iter()
            .map(|c| c.to_lab().unwrap().l())
            .collect();
        for w in labs[..10].windows(2) {
            assert!(w[0] >= w[1] - 1e-9, "lightness must not increase: {labs:?}");
        }
    }

    #[test]
    fn test_bad_seed_fails() {
        assert!(create_color_palette("#12345").is_err());
        assert!(create_color_palette("teal").is_err());
    }
}
