//! Color difference formulas: ΔE 1976, 1994, 2000, and CMC(l:c).

use crate::Lab;
use chroma_math::in_ranges;

/// 25^7, shared by the ΔE2000 chroma weighting terms.
const K25_POW7: f64 = 6103515625.0;

/// Chromas below this are treated as achromatic by ΔE2000.
const LOW_CHROMA: f64 = 1e-4;

/// Application constants for [`delta_e_1994`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum De94Application {
    /// Graphic arts: k1 = 0.045, k2 = 0.015, kL = 1.
    #[default]
    GraphicArts,
    /// Textiles: k1 = 0.048, k2 = 0.014, kL = 2.
    Textiles,
}

/// ΔE 1976: Euclidean distance in Lab.
pub fn delta_e_1976(a: &Lab, b: &Lab) -> f64 {
    let dl = a.l() - b.l();
    let da = a.a() - b.a();
    let db = a.b() - b.b();
    (dl * dl + da * da + db * db).sqrt()
}

/// ΔE 1994 with the chosen application constants.
///
/// Asymmetric by definition: the first argument is the reference.
pub fn delta_e_1994(reference: &Lab, sample: &Lab, application: De94Application) -> f64 {
    let (k1, k2, kl) = match application {
        De94Application::GraphicArts => (0.045, 0.015, 1.0),
        De94Application::Textiles => (0.048, 0.014, 2.0),
    };

    let c1 = reference.a().hypot(reference.b());
    let c2 = sample.a().hypot(sample.b());

    let dl = reference.l() - sample.l();
    let dc = c1 - c2;
    let da = reference.a() - sample.a();
    let db = reference.b() - sample.b();
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let sl = 1.0;
    let sc = 1.0 + k1 * c1;
    let sh = 1.0 + k2 * c1;

    let tl = dl / (kl * sl);
    let tc = dc / sc;
    (tl * tl + tc * tc + dh2 / (sh * sh)).sqrt()
}

/// ΔE 2000 per ISO/CIE 11664-6, with the Sharma mean-hue formulation.
///
/// The two testable departures from naive implementations:
///
/// - when both adjusted chromas fall below 1e-4 the hue difference is
///   forced to zero and the mean hue is the plain sum `h1 + h2`;
/// - the mean hue folds by ±360 when the hues are more than 180° apart,
///   keeping the mean in [0, 360).
///
/// # Example
///
/// ```rust
/// use chroma_color::{delta_e_2000, Lab};
/// use chroma_cie::{Illuminant, WhitepointMeta};
///
/// let wp = WhitepointMeta::new(Illuminant::D65);
/// let a = Lab::new(100.0, 0.0, 10.0, 1.0, wp);
/// let b = Lab::new(100.0, 0.1, -127.5, 1.0, wp);
/// assert!((delta_e_2000(&a, &b) - 41.69699725982907).abs() < 1e-9);
/// ```
pub fn delta_e_2000(lab1: &Lab, lab2: &Lab) -> f64 {
    let (l1, a1, b1) = (lab1.l(), lab1.a(), lab1.b());
    let (l2, a2, b2) = (lab2.l(), lab2.a(), lab2.b());

    let c1_ab = a1.hypot(b1);
    let c2_ab = a2.hypot(b2);
    let c_ab_mean = (c1_ab + c2_ab) / 2.0;

    let c_mean_pow7 = c_ab_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean_pow7 / (c_mean_pow7 + K25_POW7)).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let hue = |a: f64, b: f64| -> f64 {
        if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    };
    let h1p = hue(a1p, b1);
    let h2p = hue(a2p, b2);

    let low_chroma = c1p < LOW_CHROMA && c2p < LOW_CHROMA;

    let dl = l2 - l1;
    let dc = c2p - c1p;

    let dhp = if low_chroma {
        0.0
    } else {
        let dh = h2p - h1p;
        if dh.abs() <= 180.0 {
            dh
        } else if dh > 180.0 {
            dh - 360.0
        } else {
            dh + 360.0
        }
    };
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dhp.to_radians() / 2.0).sin();

    let l_mean = (l1 + l2) / 2.0;
    let c_mean = (c1p + c2p) / 2.0;

    let h_mean = if low_chroma {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_term = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_term / (20.0 + l_term).sqrt();
    let sc = 1.0 + 0.045 * c_mean;
    let sh = 1.0 + 0.015 * c_mean * t;

    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0) * ((h_mean - 275.0) / 25.0)).exp();
    let c_mean7 = c_mean.powi(7);
    let rc = 2.0 * (c_mean7 / (c_mean7 + K25_POW7)).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh_big / sh;
    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

/// ΔE CMC(l:c). Defaults are l = 2, c = 1 (acceptability).
///
/// Asymmetric by definition: the first argument is the reference.
pub fn delta_e_cmc(reference: &Lab, sample: &Lab, l: f64, c: f64) -> f64 {
    let (l1, a1, b1) = (reference.l(), reference.a(), reference.b());
    let (l2, a2, b2) = (sample.l(), sample.a(), sample.b());

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    let dl = l1 - l2;
    let dc = c1 - c2;
    let da = a1 - a2;
    let db = b1 - b2;
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let h1 = b1.atan2(a1).to_degrees().rem_euclid(360.0);

    let t = if in_ranges(h1, &[(164.0, 345.0)]) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };

    let c1_4 = c1 * c1 * c1 * c1;
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();

    let sl = if l1 < 16.0 {
        0.511
    } else {
        0.040975 * l1 / (1.0 + 0.01765 * l1)
    };
    let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;
    let sh = sc * (f * t + 1.0 - f);

    let tl = dl / (l * sl);
    let tc = dc / (c * sc);
    (tl * tl + tc * tc + dh2 / (sh * sh)).sqrt()
}
