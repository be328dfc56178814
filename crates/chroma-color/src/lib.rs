//! # chroma-color
//!
//! Color model value types and the conversion DAG between them.
//!
//! Every model is an immutable value carrying an alpha; conversions return
//! new instances. XYZ is the hub: device models (RGB, HSV, HSL, HSI, HWB)
//! reach the perceptual models (Lab, LCHab, Luv, LCHuv) through their
//! working space, and perceptual types carry their reference white so
//! chains stay illuminant-consistent.
//!
//! ```text
//! hex <-> Rgb <-> {Hsv, Hsl, Hsi, Hwb}
//!          |
//!         Xyz <-> {Lab <-> LCHab, Luv <-> LCHuv, Yxy}
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_color::Rgb;
//!
//! let c = Rgb::from_hex("#2B949E").unwrap();
//! let lab = c.to_lab().unwrap();
//! let back = lab.to_rgb().unwrap();
//! assert_eq!(back.to_hex(), "#2B949E");
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - rounding, angles
//! - [`chroma-cie`] - whitepoint metadata
//! - [`chroma-spaces`] - working-space transforms
//!
//! # Used By
//!
//! - `chroma-palette` - palette synthesis

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod blend;
mod color;
mod contrast;
mod diff;
mod error;
mod hex;
mod hsi;
mod hsl;
mod hsv;
mod hwb;
mod lab;
mod lch;
mod luv;
mod rgb;
mod xyz;
mod yxy;

pub use blend::*;
pub use color::*;
pub use contrast::*;
pub use diff::*;
pub use error::*;
pub use hex::*;
pub use hsi::*;
pub use hsl::*;
pub use hsv::*;
pub use hwb::*;
pub use lab::*;
pub use lch::*;
pub use luv::*;
pub use rgb::*;
pub use xyz::*;
pub use yxy::*;
