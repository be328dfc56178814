//! Builtin working-space definitions.
//!
//! Chromaticities follow the defining standards; whitepoints resolve via
//! the ASTM E308 tristimulus tables for the 2° observer.

use crate::RgbSpace;
use chroma_cie::{Illuminant, Resolution, WhitepointMeta};
use chroma_transfer::{gamma, prophoto, rec2020, rec709, srgb};

/// Name of the default working space.
pub const DEFAULT_SPACE: &str = "sRGB";

fn astm(ill: Illuminant) -> WhitepointMeta {
    WhitepointMeta::new(ill).with_resolution(Resolution::AstmE308)
}

pub(crate) fn builtin_spaces() -> Vec<RgbSpace> {
    vec![
        RgbSpace::from_chromaticities(
            "sRGB",
            (0.6400, 0.3300),
            (0.3000, 0.6000),
            (0.1500, 0.0600),
            astm(Illuminant::D65),
            srgb::eotf,
            srgb::oetf,
        ),
        RgbSpace::from_chromaticities(
            "Rec.709",
            (0.6400, 0.3300),
            (0.3000, 0.6000),
            (0.1500, 0.0600),
            astm(Illuminant::D65),
            rec709::eotf,
            rec709::oetf,
        ),
        RgbSpace::from_chromaticities(
            "Adobe RGB 1998",
            (0.6400, 0.3300),
            (0.2100, 0.7100),
            (0.1500, 0.0600),
            astm(Illuminant::D65),
            gamma::eotf_adobe,
            gamma::oetf_adobe,
        ),
        RgbSpace::from_chromaticities(
            "CIE RGB",
            (0.7347, 0.2653),
            (0.2738, 0.7174),
            (0.1666, 0.0089),
            astm(Illuminant::E),
            gamma::eotf_22,
            gamma::oetf_22,
        ),
        RgbSpace::from_chromaticities(
            "Display P3",
            (0.6800, 0.3200),
            (0.2650, 0.6900),
            (0.1500, 0.0600),
            astm(Illuminant::D65),
            srgb::eotf,
            srgb::oetf,
        ),
        RgbSpace::from_chromaticities(
            "Rec.2020",
            (0.7080, 0.2920),
            (0.1700, 0.7970),
            (0.1310, 0.0460),
            astm(Illuminant::D65),
            rec2020::eotf,
            rec2020::oetf,
        ),
        RgbSpace::from_chromaticities(
            "ProPhoto RGB",
            (0.7347, 0.2653),
            (0.1596, 0.8404),
            (0.0366, 0.0001),
            astm(Illuminant::D50),
            prophoto::eotf,
            prophoto::oetf,
        ),
        RgbSpace::from_chromaticities(
            "Wide Gamut RGB",
            (0.7347, 0.2653),
            (0.1152, 0.8264),
            (0.1566, 0.0177),
            astm(Illuminant::D50),
            gamma::eotf_adobe,
            gamma::oetf_adobe,
        ),
    ]
}
