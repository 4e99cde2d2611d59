//! Item type entries.

use std::fmt;

/// A wire-level item runtime ID.
///
/// Runtime IDs are only meaningful together with the protocol revision whose
/// table assigned them. Some releases use negative IDs, so the value is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuntimeId(i32);

impl RuntimeId {
    /// Creates a runtime ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw runtime ID value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for RuntimeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<RuntimeId> for i32 {
    fn from(id: RuntimeId) -> Self {
        id.0
    }
}

impl fmt::Display for RuntimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One item type as known to a single protocol revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTypeEntry {
    /// Stable, version-independent name (e.g. `minecraft:apple`).
    pub identifier: String,
    /// Wire ID for this revision.
    pub runtime_id: RuntimeId,
    /// Behavior is driven by data components. Passed through, never interpreted here.
    pub component_based: bool,
}

impl ItemTypeEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(identifier: impl Into<String>, runtime_id: RuntimeId, component_based: bool) -> Self {
        Self {
            identifier: identifier.into(),
            runtime_id,
            component_based,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_id_roundtrip_raw() {
        let id = RuntimeId::new(-214);
        assert_eq!(id.raw(), -214);
        let raw: i32 = id.into();
        assert_eq!(raw, -214);
        assert_eq!(RuntimeId::from(7), RuntimeId::new(7));
    }

    #[test]
    fn runtime_id_display() {
        assert_eq!(RuntimeId::new(-3).to_string(), "-3");
    }

    #[test]
    fn entry_new_accepts_str_and_string() {
        let a = ItemTypeEntry::new("minecraft:apple", RuntimeId::new(257), false);
        let b = ItemTypeEntry::new(String::from("minecraft:apple"), RuntimeId::new(257), false);
        assert_eq!(a, b);
        assert!(!a.component_based);
    }
}
