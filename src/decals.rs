//! Decal types and the resolver mapping a generation type to the store
//! field it writes and the filter tab it should switch on.

/// Store field a decal image is written to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DecalSlot {
    Logo,
    Full,
}

/// Toggle controlling whether a decal is currently displayed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterTab {
    Logo,
    FullTexture,
}

impl FilterTab {
    pub fn label(&self) -> &'static str {
        match self {
            FilterTab::Logo => "logo",
            FilterTab::FullTexture => "full-texture",
        }
    }
}

/// Where a resolved decal type lands: which field, which tab
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecalTarget {
    pub slot: DecalSlot,
    pub tab: FilterTab,
}

/// Fixed mapping from decal type name to target, created once and shared
const DECAL_TYPES: &[(&str, DecalTarget)] = &[
    (
        "logo",
        DecalTarget {
            slot: DecalSlot::Logo,
            tab: FilterTab::Logo,
        },
    ),
    (
        "full",
        DecalTarget {
            slot: DecalSlot::Full,
            tab: FilterTab::FullTexture,
        },
    ),
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecalError {
    #[error("unknown decal type {0:?}")]
    UnknownType(String),
}

/// Look up a decal type. An absent key is a programming error, not a
/// user-recoverable condition, so it fails with a typed error rather than
/// falling back to a default.
pub fn resolve(type_name: &str) -> Result<DecalTarget, DecalError> {
    DECAL_TYPES
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, target)| *target)
        .ok_or_else(|| DecalError::UnknownType(type_name.to_string()))
}

/// Type names in table order, for cycling through generation targets
pub fn type_names() -> impl Iterator<Item = &'static str> {
    DECAL_TYPES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_agrees_with_table() {
        for (name, target) in DECAL_TYPES {
            assert_eq!(resolve(name).unwrap(), *target);
        }
    }

    #[test]
    fn logo_maps_to_logo_slot_and_tab() {
        let target = resolve("logo").unwrap();
        assert_eq!(target.slot, DecalSlot::Logo);
        assert_eq!(target.tab, FilterTab::Logo);
    }

    #[test]
    fn full_maps_to_full_slot_and_tab() {
        let target = resolve("full").unwrap();
        assert_eq!(target.slot, DecalSlot::Full);
        assert_eq!(target.tab, FilterTab::FullTexture);
    }

    #[test]
    fn unknown_type_fails_loudly() {
        let err = resolve("sleeve").unwrap_err();
        assert_eq!(err, DecalError::UnknownType(String::from("sleeve")));
    }

    #[test]
    fn type_names_cover_the_table() {
        let names: Vec<_> = type_names().collect();
        assert_eq!(names, vec!["logo", "full"]);
    }
}
