//! # chroma-math
//!
//! Math utilities for CIE colorimetry.
//!
//! This crate provides the numerical primitives the color pipeline is
//! built on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms and chromatic adaptation
//! - [`Vec3`] - tristimulus and RGB triplets
//! - [`round_float`] - decimal rounding that survives binary FP drift
//! - Angle, polar, and hex-digit helpers used across the workspace
//!
//! # Design
//!
//! All math is `f64`. Matrix operations assume **row-major** storage and
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.41245644, 0.35757608, 0.18043748],
//!     [0.21267285, 0.71515216, 0.07217499],
//!     [0.01933390, 0.11919203, 0.95030408],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `chroma-cie` - whitepoint resolution and chromatic adaptation
//! - `chroma-spaces` - RGB/XYZ matrix generation
//! - `chroma-color` - model conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod num;
mod vec3;

pub use mat3::*;
pub use num::*;
pub use vec3::*;
