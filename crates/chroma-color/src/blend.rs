//! Porter-Duff source-over alpha blending.

use crate::Rgb;

/// Quantizes a channel to the 8-bit grid.
///
/// Compositing is defined over 0-255 channel values; folding in
/// unquantized floats shifts the documented results by a level.
#[inline]
fn q255(v: f64) -> f64 {
    (v * 255.0).round() / 255.0
}

/// Composites an ordered sequence of colors with source-over.
///
/// A single color is composited over an opaque white backdrop; otherwise
/// the first color is the backdrop and the rest fold onto it in order.
/// Each step computes `C = Csrc * asrc + Cdst * adst * (1 - asrc)` per
/// channel on the 8-bit grid and forces the result opaque.
///
/// Returns `None` for an empty sequence.
///
/// # Example
///
/// ```rust
/// use chroma_color::{blend, Rgb};
///
/// let layers = [
///     Rgb::from_hex("#FFFFFF").unwrap(),
///     Rgb::from_hex("#FF0000E6").unwrap(),
///     Rgb::from_hex("#00FF0080").unwrap(),
///     Rgb::from_hex("#0000FF4D").unwrap(),
/// ];
/// let out = blend(&layers).unwrap();
/// assert_eq!(out.to_values(), (89, 98, 85, 1.0));
/// ```
pub fn blend(colors: &[Rgb]) -> Option<Rgb> {
    let (mut dst, rest) = match colors {
        [] => return None,
        [only] => (Rgb::raw(1.0, 1.0, 1.0, 1.0, only.space()), colors),
        [first, rest @ ..] => (*first, rest),
    };

    for src in rest {
        let sa = src.alpha();
        let da = dst.alpha();
        let over = |s: f64, d: f64| q255(s * sa + d * da * (1.0 - sa));
        dst = Rgb::raw(
            over(src.r(), dst.r()),
            over(src.g(), dst.g()),
            over(src.b(), dst.b()),
            1.0,
            dst.space(),
        );
    }
    Some(dst)
}
