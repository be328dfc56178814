//! Process-wide named registry of working spaces.
//!
//! The registry is seeded with the builtin spaces on first access and is
//! read-mostly afterwards; registration is a rare startup-time operation.

use crate::{builtin_spaces, RgbSpace, SpaceError, SpaceResult};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::debug;

fn registry() -> &'static RwLock<HashMap<&'static str, Arc<RgbSpace>>> {
    static REGISTRY: OnceLock<RwLock<HashMap<&'static str, Arc<RgbSpace>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        debug!("seeding RGB working space registry");
        let map = builtin_spaces()
            .into_iter()
            .map(|s| (s.name(), Arc::new(s)))
            .collect();
        RwLock::new(map)
    })
}

/// Looks up a working space by its registered name (case-sensitive).
///
/// # Example
///
/// ```rust
/// use chroma_spaces::space;
///
/// assert!(space("Display P3").is_ok());
/// assert!(space("NTSC").is_err());
/// ```
pub fn space(name: &str) -> SpaceResult<Arc<RgbSpace>> {
    let reg = registry().read().expect("space registry poisoned");
    reg.get(name)
        .cloned()
        .ok_or_else(|| SpaceError::UnknownSpace(name.to_string()))
}

/// Registers an additional working space.
///
/// Fails with [`SpaceError::DuplicateSpace`] when the name is taken.
pub fn register_space(space: RgbSpace) -> SpaceResult<()> {
    let mut reg = registry().write().expect("space registry poisoned");
    if reg.contains_key(space.name()) {
        return Err(SpaceError::DuplicateSpace(space.name().to_string()));
    }
    debug!(space = space.name(), "registering RGB working space");
    reg.insert(space.name(), Arc::new(space));
    Ok(())
}

/// Names of all registered spaces.
pub fn space_names() -> Vec<&'static str> {
    let reg = registry().read().expect("space registry poisoned");
    let mut names: Vec<_> = reg.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_cie::{Illuminant, WhitepointMeta};
    use chroma_transfer::srgb;

    #[test]
    fn test_builtin_lookup() {
        for name in [
            "sRGB",
            "Rec.709",
            "Adobe RGB 1998",
            "CIE RGB",
            "Display P3",
            "Rec.2020",
            "ProPhoto RGB",
            "Wide Gamut RGB",
        ] {
            assert!(space(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_unknown_space() {
        assert!(matches!(space("NTSC 1953"), Err(SpaceError::UnknownSpace(_))));
    }

    #[test]
    fn test_duplicate_rejected() {
        let dup = RgbSpace::from_chromaticities(
            "sRGB",
            (0.64, 0.33),
            (0.30, 0.60),
            (0.15, 0.06),
            WhitepointMeta::new(Illuminant::D65),
            srgb::eotf,
            srgb::oetf,
        );
        assert!(matches!(
            register_space(dup),
            Err(SpaceError::DuplicateSpace(_))
        ));
    }

    #[test]
    fn test_register_new() {
        let custom = RgbSpace::from_chromaticities(
            "test-custom",
            (0.64, 0.33),
            (0.30, 0.60),
            (0.15, 0.06),
            WhitepointMeta::new(Illuminant::D55),
            srgb::eotf,
            srgb::oetf,
        );
        register_space(custom).unwrap();
        assert!(space("test-custom").is_ok());
    }
}
