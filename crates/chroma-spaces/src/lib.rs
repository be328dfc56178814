//! # chroma-spaces
//!
//! RGB working spaces and their XYZ transforms.
//!
//! An [`RgbSpace`] bundles everything needed to move between non-linear
//! RGB and CIE XYZ:
//!
//! - the XYZ of its R, G, B primaries (derived from xy chromaticities)
//! - a reference whitepoint ([`chroma_cie::WhitepointMeta`])
//! - an EOTF/OETF pair from [`chroma_transfer`]
//! - lazily derived `{to_xyz, to_rgb}` matrices
//!
//! Spaces live in a process-wide named registry seeded with the eight
//! builtin spaces; more can be registered at startup.
//!
//! # Usage
//!
//! ```rust
//! use chroma_spaces::space;
//! use chroma_math::Vec3;
//!
//! let srgb = space("sRGB").unwrap();
//! let xyz = srgb.rgb_to_xyz(Vec3::new(1.0, 1.0, 1.0), None).unwrap();
//! // White maps to the reference whitepoint (Y = 1)
//! assert!((xyz.y - 1.0).abs() < 1e-7);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - matrix derivation
//! - [`chroma-cie`] - whitepoint resolution and chromatic adaptation
//! - [`chroma-transfer`] - encode/decode curves
//!
//! # Used By
//!
//! - `chroma-color` - model conversions through XYZ

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builtin;
mod error;
mod registry;
mod space;

pub use builtin::*;
pub use error::*;
pub use registry::*;
pub use space::*;
