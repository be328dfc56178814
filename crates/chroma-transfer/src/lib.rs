//! # chroma-transfer
//!
//! Transfer functions (OETF/EOTF) for the RGB working spaces.
//!
//! Transfer functions convert between linear light and the non-linear
//! encodings used for storage and display.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **Gamma**: The exponent in a power-law transfer function
//!
//! # Supported Transfer Functions
//!
//! | Function | Working spaces | Shape |
//! |----------|----------------|-------|
//! | [`srgb`] | sRGB, Display P3 | piecewise linear/power, IEC 61966-2-1 |
//! | [`rec709`] | Rec.709 | piecewise, ITU-R BT.709 |
//! | [`rec2020`] | Rec.2020 | piecewise, ITU-R BT.2020 (exact constants) |
//! | [`prophoto`] | ProPhoto RGB | 1/512 linear knee, gamma 1.8 |
//! | [`gamma`] | CIE RGB (2.2), Adobe RGB 1998 / Wide Gamut RGB (563/256) | pure power |
//!
//! # Sign handling
//!
//! Every function is the odd extension of its non-negative formula:
//! `f(v) = sign(v) * f(|v|)`. Linear-domain values may legitimately be
//! negative (out-of-gamut XYZ round-trips), and the extension keeps the
//! EOTF/OETF pair an exact inverse across zero.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let back = srgb::oetf(linear);
//! assert!((back - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `chroma-spaces` - per-space encode/decode

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod prophoto;
pub mod rec2020;
pub mod rec709;
pub mod srgb;

// Re-export common functions
pub use gamma::{gamma_eotf, gamma_oetf};
pub use prophoto::{eotf as prophoto_eotf, oetf as prophoto_oetf};
pub use rec2020::{eotf as rec2020_eotf, oetf as rec2020_oetf};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};

/// Applies the odd extension of `f` to `v`: `sign(v) * f(|v|)`.
#[inline]
pub(crate) fn mirror(v: f64, f: impl Fn(f64) -> f64) -> f64 {
    if v < 0.0 {
        -f(-v)
    } else {
        f(v)
    }
}
