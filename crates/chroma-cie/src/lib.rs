//! # chroma-cie
//!
//! CIE standard illuminants and chromatic adaptation.
//!
//! This crate owns the observer/illuminant datasets and everything needed to
//! move XYZ tristimuli between reference whites:
//!
//! - [`Illuminant`] / [`Observer`] - the CIE standard illuminant set for the
//!   2° and 10° observers
//! - [`WhitepointMeta`] - how a whitepoint is resolved (ASTM E308 tristimulus
//!   lookup, or IEC 61966-2-1 conversion from xy chromaticity)
//! - [`adaptation_matrix`] / [`adapt`] - memoized chromatic adaptation under
//!   a named transform (XYZ scaling, von Kries, Bradford, CAT02, CAT16)
//!
//! # Usage
//!
//! ```rust
//! use chroma_cie::{adapt, Illuminant, WhitepointMeta};
//! use chroma_math::Vec3;
//!
//! let d50 = WhitepointMeta::new(Illuminant::D50);
//! let d65 = WhitepointMeta::new(Illuminant::D65);
//!
//! let xyz_d50 = Vec3::new(0.2, 0.3, 0.4);
//! let xyz_d65 = adapt(xyz_d50, &d50, &d65, "bradford").unwrap();
//! let back = adapt(xyz_d65, &d65, &d50, "bradford").unwrap();
//! assert!((back.x - 0.2).abs() < 1e-10);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - matrix operations
//!
//! # Used By
//!
//! - `chroma-spaces` - whitepoint resolution for RGB working spaces
//! - `chroma-color` - whitepoint-consistent model conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod error;
mod illuminant;

pub use adapt::*;
pub use error::*;
pub use illuminant::*;
