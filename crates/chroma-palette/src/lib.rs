//! # chroma-palette
//!
//! Harmonious tonal palette synthesis.
//!
//! Given a single seed color, the synthesizer finds the perceptually
//! nearest tone among twenty designer-curated "golden" palettes (by
//! ΔE2000 in Lab), then reshapes that palette around the seed by
//! propagating the lightness/chroma/hue deltas through LCH(ab). The
//! result is a family of 14 tones (50-900 plus four accents) in which the
//! seed itself appears verbatim.
//!
//! Harmony rules derive additional palettes by rotating the seed hue
//! (complementary, triadic, ...).
//!
//! # Usage
//!
//! ```rust
//! use chroma_palette::{create_color_palette, palettes_by_rule};
//!
//! let palette = create_color_palette("#2b949e").unwrap();
//! assert_eq!(palette.colors.len(), 14);
//! assert_eq!(palette.colors[palette.base_color_index].to_hex(), "#2B949E");
//!
//! let family = palettes_by_rule("#2b949e", "tetradic").unwrap();
//! assert_eq!(family.len(), 4);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-color`] - Lab/LCH conversions and ΔE2000
//!
//! Synthesis never fails for a valid seed hex: the golden tables
//! guarantee a nearest match exists.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod golden;
mod rules;
mod synth;
mod tone;

pub use golden::*;
pub use rules::*;
pub use synth::*;
pub use tone::*;
