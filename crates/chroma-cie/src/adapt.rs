//! Chromatic adaptation transforms (CAT).
//!
//! Adapting an XYZ tristimulus from one illuminant to another goes through a
//! cone-response space: with M the method's cone matrix and Ws/Wd the source
//! and destination whitepoints,
//!
//! ```text
//! adapted = M^-1 * diag(M*Wd / M*Ws) * M
//! ```
//!
//! Methods are held in a process-wide registry keyed by name; the built-in
//! set is `xyzScaling`, `vonKries`, `bradford`, `cat02`, `cat16`. Computed
//! matrices for table-resolved whitepoints are memoized in an append-only
//! cache.
//!
//! # Reference
//!
//! Lam (1985) for Bradford; CIECAM02/CAM16 for CAT02/CAT16; Lindbloom's
//! chromatic adaptation notes for the composition.

use crate::{CieError, CieResult, Illuminant, Observer, Resolution, WhitepointMeta};
use chroma_math::Mat3;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use tracing::{debug, trace};

/// Default adaptation method used across the workspace.
pub const DEFAULT_METHOD: &str = "bradford";

// ============================================================================
// Cone-response matrices
// ============================================================================

/// XYZ scaling: adapts directly in XYZ space (identity cone matrix).
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Von Kries cone matrix (Hunt-Pointer-Estevez, D65-normalized).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Bradford cone matrix. Best general-purpose choice.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Bradford inverse rounded to 7 decimals, as published by CSS Color 4.
///
/// Used by the [`AdaptOptions::inverse_digits`] interop variant.
pub const BRADFORD_INV_7: Mat3 = Mat3::from_rows([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// CAT02 cone matrix (CIECAM02).
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// CAT16 cone matrix (CAM16).
pub const CAT16: Mat3 = Mat3::from_rows([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

// ============================================================================
// Method registry
// ============================================================================

fn method_registry() -> &'static RwLock<HashMap<String, Mat3>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, Mat3>>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        debug!("seeding adaptation method registry");
        let mut map = HashMap::new();
        map.insert("xyzScaling".to_string(), XYZ_SCALING);
        map.insert("vonKries".to_string(), VON_KRIES);
        map.insert("bradford".to_string(), BRADFORD);
        map.insert("cat02".to_string(), CAT02);
        map.insert("cat16".to_string(), CAT16);
        RwLock::new(map)
    })
}

/// Returns the cone-response matrix registered under `name`.
///
/// Names are case-sensitive.
pub fn method_matrix(name: &str) -> CieResult<Mat3> {
    let reg = method_registry().read().expect("method registry poisoned");
    reg.get(name)
        .copied()
        .ok_or_else(|| CieError::UnknownMethod(name.to_string()))
}

/// Registers a new adaptation method under `name`.
///
/// Registering a name twice is a precondition violation and fails with
/// [`CieError::DuplicateMethod`].
pub fn register_method(name: &str, cone: Mat3) -> CieResult<()> {
    let mut reg = method_registry().write().expect("method registry poisoned");
    if reg.contains_key(name) {
        return Err(CieError::DuplicateMethod(name.to_string()));
    }
    debug!(method = name, "registering adaptation method");
    reg.insert(name.to_string(), cone);
    Ok(())
}

// ============================================================================
// Matrix construction and cache
// ============================================================================

/// Options for adaptation matrix construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdaptOptions {
    /// Round the inverted cone matrix to this many decimals before
    /// composing, as some interop targets (CSS Color 4) do. `None` keeps
    /// full precision and produces the Lindbloom result.
    pub inverse_digits: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    src_observer: Observer,
    src_illuminant: Illuminant,
    dst_observer: Observer,
    dst_illuminant: Illuminant,
    method: String,
    // Both metas must share it for the entry to be cacheable, so one
    // field is enough to keep the two resolution policies apart.
    resolution: Resolution,
}

fn matrix_cache() -> &'static RwLock<HashMap<CacheKey, Mat3>> {
    static CACHE: OnceLock<RwLock<HashMap<CacheKey, Mat3>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

fn build_matrix(
    src: &WhitepointMeta,
    dst: &WhitepointMeta,
    method: &str,
    opts: AdaptOptions,
) -> CieResult<Mat3> {
    let cone = method_matrix(method)?;
    let mut cone_inv = cone
        .inverse()
        .ok_or_else(|| CieError::Singular(format!("cone matrix for '{method}'")))?;
    if let Some(digits) = opts.inverse_digits {
        cone_inv = cone_inv.rounded(digits);
    }

    let ws = src.resolve();
    let wd = dst.resolve();
    let rs = cone * ws;
    let rd = cone * wd;
    let scale = Mat3::diagonal_vec(rd / rs);

    Ok(cone_inv * scale * cone)
}

/// Computes the adaptation matrix from `src` to `dst` under `method`.
///
/// Results for table-resolved whitepoints (no explicit xy override) are
/// memoized in a process-wide cache keyed by the four observer/illuminant
/// identifiers plus the method name. The cache is append-only; concurrent
/// writers always agree on the value.
///
/// # Example
///
/// ```rust
/// use chroma_cie::{adaptation_matrix, Illuminant, WhitepointMeta};
///
/// let d50 = WhitepointMeta::new(Illuminant::D50);
/// let d65 = WhitepointMeta::new(Illuminant::D65);
/// let m = adaptation_matrix(&d50, &d65, "bradford").unwrap();
/// let w = m * d50.resolve();
/// assert!((w.x - d65.resolve().x).abs() < 1e-12);
/// ```
pub fn adaptation_matrix(
    src: &WhitepointMeta,
    dst: &WhitepointMeta,
    method: &str,
) -> CieResult<Mat3> {
    let cacheable =
        src.is_tabular() && dst.is_tabular() && src.resolution == dst.resolution;
    if !cacheable {
        return build_matrix(src, dst, method, AdaptOptions::default());
    }

    let key = CacheKey {
        src_observer: src.observer,
        src_illuminant: src.illuminant,
        dst_observer: dst.observer,
        dst_illuminant: dst.illuminant,
        method: method.to_string(),
        resolution: src.resolution,
    };

    {
        let cache = matrix_cache().read().expect("adaptation cache poisoned");
        if let Some(m) = cache.get(&key) {
            trace!(?key.src_illuminant, ?key.dst_illuminant, method, "adaptation cache hit");
            return Ok(*m);
        }
    }

    debug!(?key.src_illuminant, ?key.dst_illuminant, method, "building adaptation matrix");
    let m = build_matrix(src, dst, method, AdaptOptions::default())?;
    let mut cache = matrix_cache().write().expect("adaptation cache poisoned");
    cache.insert(key, m);
    Ok(m)
}

/// [`adaptation_matrix`] with explicit [`AdaptOptions`]; never cached.
pub fn adaptation_matrix_with(
    src: &WhitepointMeta,
    dst: &WhitepointMeta,
    method: &str,
    opts: AdaptOptions,
) -> CieResult<Mat3> {
    build_matrix(src, dst, method, opts)
}

/// Adapts an XYZ tristimulus from `src` to `dst` under `method`.
pub fn adapt(
    values: chroma_math::Vec3,
    src: &WhitepointMeta,
    dst: &WhitepointMeta,
    method: &str,
) -> CieResult<chroma_math::Vec3> {
    Ok(adaptation_matrix(src, dst, method)? * values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_math::Vec3;

    fn meta(ill: Illuminant) -> WhitepointMeta {
        WhitepointMeta::new(ill)
    }

    #[test]
    fn test_whitepoint_maps_exactly() {
        for method in ["xyzScaling", "vonKries", "bradford", "cat02", "cat16"] {
            let m = adaptation_matrix(&meta(Illuminant::D50), &meta(Illuminant::D65), method)
                .unwrap();
            let w = m * meta(Illuminant::D50).resolve();
            let d65 = meta(Illuminant::D65).resolve();
            assert!((w.x - d65.x).abs() < 1e-12, "{method}");
            assert!((w.y - d65.y).abs() < 1e-12, "{method}");
            assert!((w.z - d65.z).abs() < 1e-12, "{method}");
        }
    }

    #[test]
    fn test_same_illuminant_is_identity() {
        let m =
            adaptation_matrix(&meta(Illuminant::D65), &meta(Illuminant::D65), "bradford").unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m.m[i][j] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        let v = Vec3::new(0.408, 0.323, 0.850);
        let there = adapt(v, &meta(Illuminant::A), &meta(Illuminant::D75), "cat02").unwrap();
        let back = adapt(there, &meta(Illuminant::D75), &meta(Illuminant::A), "cat02").unwrap();
        assert!((back.x - v.x).abs() < 1e-10);
        assert!((back.y - v.y).abs() < 1e-10);
        assert!((back.z - v.z).abs() < 1e-10);
    }

    #[test]
    fn test_rounded_inverse_variant_differs() {
        let src = WhitepointMeta::new(Illuminant::D50).with_xy(0.3457, 0.3585);
        let dst = WhitepointMeta::new(Illuminant::D65).with_xy(0.3127, 0.3290);
        let lindbloom = adaptation_matrix_with(&src, &dst, "bradford", AdaptOptions::default())
            .unwrap();
        let css = adaptation_matrix_with(
            &src,
            &dst,
            "bradford",
            AdaptOptions { inverse_digits: Some(7) },
        )
        .unwrap();
        // Same transform to ~7 decimals, not bit-identical.
        let mut max_diff: f64 = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                max_diff = max_diff.max((lindbloom.m[i][j] - css.m[i][j]).abs());
            }
        }
        assert!(max_diff > 0.0);
        assert!(max_diff < 1e-6);
    }

    #[test]
    fn test_css_variant_uses_published_inverse() {
        // Composing with the published 7-decimal Bradford inverse must be
        // bit-identical to the inverse_digits option.
        let src = WhitepointMeta::new(Illuminant::D50).with_xy(0.3457, 0.3585);
        let dst = WhitepointMeta::new(Illuminant::D65).with_xy(0.3127, 0.3290);
        let via_opts = adaptation_matrix_with(
            &src,
            &dst,
            "bradford",
            AdaptOptions { inverse_digits: Some(7) },
        )
        .unwrap();

        let ws = src.resolve();
        let wd = dst.resolve();
        let scale = Mat3::diagonal_vec((BRADFORD * wd) / (BRADFORD * ws));
        let manual = BRADFORD_INV_7 * scale * BRADFORD;
        assert_eq!(via_opts, manual);
    }

    #[test]
    fn test_unknown_method() {
        assert!(matches!(
            adaptation_matrix(&meta(Illuminant::D50), &meta(Illuminant::D65), "sharpened"),
            Err(CieError::UnknownMethod(_))
        ));
    }

    #[test]
    fn test_duplicate_method_rejected() {
        register_method("testDup", BRADFORD).unwrap();
        assert!(matches!(
            register_method("testDup", CAT02),
            Err(CieError::DuplicateMethod(_))
        ));
    }

    #[test]
    fn test_cache_idempotent() {
        let a = adaptation_matrix(&meta(Illuminant::F2), &meta(Illuminant::C), "vonKries").unwrap();
        let b = adaptation_matrix(&meta(Illuminant::F2), &meta(Illuminant::C), "vonKries").unwrap();
        assert_eq!(a, b);
    }
}
