//! CIE standard illuminant datasets and whitepoint resolution.
//!
//! Two datasets are carried per observer:
//!
//! - XYZ tristimuli per ASTM E308, normalized so Y = 1
//! - xy chromaticity coordinates
//!
//! and two resolution policies select between them: [`Resolution::AstmE308`]
//! returns the tristimulus table entry directly, while the default
//! [`Resolution::Iec61966`] converts chromaticity to XYZ via
//! `(x/y, 1, (1-x-y)/y)` as specified in IEC 61966-2-1.
//!
//! # Reference
//!
//! ASTM E308-01, IEC 61966-2-1:1999.

use crate::{CieError, CieResult};
use chroma_math::Vec3;
use std::fmt;
use std::str::FromStr;

/// CIE standard observer angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Observer {
    /// CIE 1931 2° standard observer.
    #[default]
    Two,
    /// CIE 1964 10° supplementary observer.
    Ten,
}

impl Observer {
    /// Observer angle in degrees.
    #[inline]
    pub const fn degrees(self) -> u8 {
        match self {
            Observer::Two => 2,
            Observer::Ten => 10,
        }
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl FromStr for Observer {
    type Err = CieError;

    fn from_str(s: &str) -> CieResult<Self> {
        match s {
            "2" => Ok(Observer::Two),
            "10" => Ok(Observer::Ten),
            _ => Err(CieError::UnknownObserver(s.to_string())),
        }
    }
}

/// CIE standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    #[default]
    D65,
    D75,
    E,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// All standard illuminants, in table order.
pub const ILLUMINANTS: [Illuminant; 20] = [
    Illuminant::A,
    Illuminant::B,
    Illuminant::C,
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
    Illuminant::E,
    Illuminant::F1,
    Illuminant::F2,
    Illuminant::F3,
    Illuminant::F4,
    Illuminant::F5,
    Illuminant::F6,
    Illuminant::F7,
    Illuminant::F8,
    Illuminant::F9,
    Illuminant::F10,
    Illuminant::F11,
    Illuminant::F12,
];

impl Illuminant {
    /// Canonical illuminant name ("D65", "F11", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Illuminant::A => "A",
            Illuminant::B => "B",
            Illuminant::C => "C",
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::E => "E",
            Illuminant::F1 => "F1",
            Illuminant::F2 => "F2",
            Illuminant::F3 => "F3",
            Illuminant::F4 => "F4",
            Illuminant::F5 => "F5",
            Illuminant::F6 => "F6",
            Illuminant::F7 => "F7",
            Illuminant::F8 => "F8",
            Illuminant::F9 => "F9",
            Illuminant::F10 => "F10",
            Illuminant::F11 => "F11",
            Illuminant::F12 => "F12",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = CieError;

    fn from_str(s: &str) -> CieResult<Self> {
        ILLUMINANTS
            .iter()
            .copied()
            .find(|i| i.name() == s)
            .ok_or_else(|| CieError::UnknownIlluminant {
                name: s.to_string(),
                observer: 2,
            })
    }
}

// ============================================================================
// ASTM E308 tristimulus tables (Y = 1)
// ============================================================================

/// XYZ tristimuli for the 2° observer, ASTM E308 table order.
const TRISTIMULUS_2: [[f64; 3]; 20] = [
    [1.09850, 1.0, 0.35585], // A
    [0.99072, 1.0, 0.85223], // B
    [0.98074, 1.0, 1.18232], // C
    [0.96422, 1.0, 0.82521], // D50
    [0.95682, 1.0, 0.92149], // D55
    [0.95047, 1.0, 1.08883], // D65
    [0.94972, 1.0, 1.22638], // D75
    [1.00000, 1.0, 1.00000], // E
    [0.92834, 1.0, 1.03665], // F1
    [0.99186, 1.0, 0.67393], // F2
    [1.03754, 1.0, 0.49861], // F3
    [1.09147, 1.0, 0.38813], // F4
    [0.90872, 1.0, 0.98723], // F5
    [0.97309, 1.0, 0.60191], // F6
    [0.95041, 1.0, 1.08747], // F7
    [0.96413, 1.0, 0.82333], // F8
    [1.00365, 1.0, 0.67868], // F9
    [0.96174, 1.0, 0.81712], // F10
    [1.00962, 1.0, 0.64350], // F11
    [1.08046, 1.0, 0.39228], // F12
];

/// XYZ tristimuli for the 10° observer, ASTM E308 table order.
const TRISTIMULUS_10: [[f64; 3]; 20] = [
    [1.11144, 1.0, 0.35200], // A
    [0.99178, 1.0, 0.84349], // B
    [0.97285, 1.0, 1.16145], // C
    [0.96720, 1.0, 0.81427], // D50
    [0.95799, 1.0, 0.90926], // D55
    [0.94811, 1.0, 1.07304], // D65
    [0.94416, 1.0, 1.20641], // D75
    [1.00000, 1.0, 1.00000], // E
    [0.94791, 1.0, 1.03191], // F1
    [1.03280, 1.0, 0.69026], // F2
    [1.08968, 1.0, 0.51965], // F3
    [1.14961, 1.0, 0.40963], // F4
    [0.93369, 1.0, 0.98636], // F5
    [1.02148, 1.0, 0.62074], // F6
    [0.95792, 1.0, 1.07687], // F7
    [0.97115, 1.0, 0.81135], // F8
    [1.02116, 1.0, 0.67826], // F9
    [0.99001, 1.0, 0.83134], // F10
    [1.03866, 1.0, 0.65627], // F11
    [1.11428, 1.0, 0.40353], // F12
];

// ============================================================================
// Chromaticity tables
// ============================================================================

/// xy chromaticities for the 2° observer.
const CHROMATICITY_2: [[f64; 2]; 20] = [
    [0.44757, 0.40745], // A
    [0.34842, 0.35161], // B
    [0.31006, 0.31616], // C
    [0.34567, 0.35850], // D50
    [0.33242, 0.34743], // D55
    [0.31271, 0.32902], // D65
    [0.29902, 0.31485], // D75
    [1.0 / 3.0, 1.0 / 3.0], // E
    [0.31310, 0.33727], // F1
    [0.37208, 0.37529], // F2
    [0.40910, 0.39430], // F3
    [0.44018, 0.40329], // F4
    [0.31379, 0.34531], // F5
    [0.37790, 0.38835], // F6
    [0.31292, 0.32933], // F7
    [0.34588, 0.35875], // F8
    [0.37417, 0.37281], // F9
    [0.34609, 0.35986], // F10
    [0.38052, 0.37713], // F11
    [0.43695, 0.40441], // F12
];

/// xy chromaticities for the 10° observer.
const CHROMATICITY_10: [[f64; 2]; 20] = [
    [0.45117, 0.40594], // A
    [0.34980, 0.35270], // B
    [0.31039, 0.31905], // C
    [0.34773, 0.35952], // D50
    [0.33411, 0.34877], // D55
    [0.31382, 0.33100], // D65
    [0.29968, 0.31740], // D75
    [1.0 / 3.0, 1.0 / 3.0], // E
    [0.31811, 0.33559], // F1
    [0.37925, 0.36733], // F2
    [0.41761, 0.38324], // F3
    [0.44920, 0.39074], // F4
    [0.31975, 0.34246], // F5
    [0.38660, 0.37847], // F6
    [0.31569, 0.32960], // F7
    [0.34902, 0.35939], // F8
    [0.37829, 0.37045], // F9
    [0.35090, 0.35444], // F10
    [0.38541, 0.37123], // F11
    [0.44256, 0.39717], // F12
];

/// Looks up the ASTM E308 tristimulus for (observer, illuminant).
#[inline]
pub fn tristimulus(observer: Observer, illuminant: Illuminant) -> Vec3 {
    let t = match observer {
        Observer::Two => TRISTIMULUS_2[illuminant.index()],
        Observer::Ten => TRISTIMULUS_10[illuminant.index()],
    };
    Vec3::from_array(t)
}

/// Looks up the xy chromaticity for (observer, illuminant).
#[inline]
pub fn chromaticity(observer: Observer, illuminant: Illuminant) -> (f64, f64) {
    let c = match observer {
        Observer::Two => CHROMATICITY_2[illuminant.index()],
        Observer::Ten => CHROMATICITY_10[illuminant.index()],
    };
    (c[0], c[1])
}

/// Converts xy chromaticity to XYZ with Y = 1.
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

// ============================================================================
// Whitepoint resolution
// ============================================================================

/// Policy for turning a [`WhitepointMeta`] into an XYZ tristimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// Convert xy chromaticity via `(x/y, 1, (1-x-y)/y)` per IEC 61966-2-1.
    #[default]
    Iec61966,
    /// Look the tristimulus up in the ASTM E308 tables.
    AstmE308,
}

/// Describes how a reference white is obtained.
///
/// # Example
///
/// ```rust
/// use chroma_cie::{Illuminant, Observer, Resolution, WhitepointMeta};
///
/// // D65 for the 2° observer via the IEC conversion (the default)
/// let meta = WhitepointMeta::new(Illuminant::D65);
///
/// // The same illuminant straight from the ASTM tables
/// let astm = WhitepointMeta::new(Illuminant::D65).with_resolution(Resolution::AstmE308);
///
/// // An explicit chromaticity override
/// let css = WhitepointMeta::new(Illuminant::D65).with_xy(0.3127, 0.3290);
/// assert_ne!(meta.resolve(), astm.resolve());
/// let _ = css;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WhitepointMeta {
    /// Standard illuminant.
    pub illuminant: Illuminant,
    /// Standard observer.
    pub observer: Observer,
    /// Explicit chromaticity override; bypasses the xy table lookup.
    pub xy: Option<(f64, f64)>,
    /// Resolution policy.
    pub resolution: Resolution,
}

impl WhitepointMeta {
    /// Meta for `illuminant` with the 2° observer and IEC resolution.
    pub const fn new(illuminant: Illuminant) -> Self {
        Self {
            illuminant,
            observer: Observer::Two,
            xy: None,
            resolution: Resolution::Iec61966,
        }
    }

    /// Sets the observer.
    pub const fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = observer;
        self
    }

    /// Sets an explicit xy chromaticity.
    pub const fn with_xy(mut self, x: f64, y: f64) -> Self {
        self.xy = Some((x, y));
        self
    }

    /// Sets the resolution policy.
    pub const fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Resolves the meta to an XYZ whitepoint (Y = 1).
    pub fn resolve(&self) -> Vec3 {
        match self.resolution {
            Resolution::AstmE308 => tristimulus(self.observer, self.illuminant),
            Resolution::Iec61966 => {
                let (x, y) = self
                    .xy
                    .unwrap_or_else(|| chromaticity(self.observer, self.illuminant));
                xy_to_xyz(x, y)
            }
        }
    }

    /// True when the whitepoint comes from the standard tables (no xy
    /// override), which makes it usable as an adaptation cache key.
    #[inline]
    pub(crate) fn is_tabular(&self) -> bool {
        self.xy.is_none()
    }
}

/// Resolves a whitepoint by illuminant and observer name strings.
///
/// The picker-facing convenience entry: names are matched case-sensitively
/// against the standard set.
pub fn whitepoint(illuminant: &str, observer: &str) -> CieResult<Vec3> {
    let obs = Observer::from_str(observer)?;
    let ill = Illuminant::from_str(illuminant).map_err(|_| CieError::UnknownIlluminant {
        name: illuminant.to_string(),
        observer: obs.degrees(),
    })?;
    Ok(WhitepointMeta::new(ill).with_observer(obs).resolve())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_normalized() {
        for ill in ILLUMINANTS {
            assert_eq!(tristimulus(Observer::Two, ill).y, 1.0, "{ill}");
            assert_eq!(tristimulus(Observer::Ten, ill).y, 1.0, "{ill}");
        }
    }

    #[test]
    fn test_astm_lookup() {
        let d65 = tristimulus(Observer::Two, Illuminant::D65);
        assert_eq!(d65, Vec3::new(0.95047, 1.0, 1.08883));
        let a10 = tristimulus(Observer::Ten, Illuminant::A);
        assert_eq!(a10, Vec3::new(1.11144, 1.0, 0.35200));
    }

    #[test]
    fn test_iec_resolution() {
        let meta = WhitepointMeta::new(Illuminant::E);
        let wp = meta.resolve();
        assert!((wp.x - 1.0).abs() < 1e-12);
        assert!((wp.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_xy_override() {
        let meta = WhitepointMeta::new(Illuminant::D65).with_xy(0.3127, 0.3290);
        let wp = meta.resolve();
        assert!((wp.x - 0.3127 / 0.3290).abs() < 1e-12);
        assert_eq!(wp.y, 1.0);
    }

    #[test]
    fn test_resolutions_agree_loosely() {
        // IEC-converted chromaticity and the ASTM tristimulus describe the
        // same light; they agree to about three decimals.
        for ill in [Illuminant::A, Illuminant::D50, Illuminant::D65, Illuminant::F11] {
            let iec = WhitepointMeta::new(ill).resolve();
            let astm = tristimulus(Observer::Two, ill);
            assert!((iec.x - astm.x).abs() < 2e-3, "{ill}");
            assert!((iec.z - astm.z).abs() < 2e-3, "{ill}");
        }
    }

    #[test]
    fn test_name_resolution() {
        assert!(whitepoint("D65", "2").is_ok());
        assert!(whitepoint("F11", "10").is_ok());
        assert!(matches!(
            whitepoint("D60", "2"),
            Err(CieError::UnknownIlluminant { .. })
        ));
        assert!(matches!(
            whitepoint("D65", "5"),
            Err(CieError::UnknownObserver(_))
        ));
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for ill in ILLUMINANTS {
            assert_eq!(ill.name().parse::<Illuminant>().unwrap(), ill);
        }
    }
}
