//! Server-side and wire-side item references.

use dictionary::RuntimeId;

/// An item as the server's item model names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalItem {
    /// Stable identifier, e.g. `minecraft:apple`.
    pub identifier: String,
    /// Variant/damage value owned by the item model.
    pub meta: u16,
}

impl LocalItem {
    #[must_use]
    pub fn new(identifier: impl Into<String>, meta: u16) -> Self {
        Self {
            identifier: identifier.into(),
            meta,
        }
    }
}

/// An item as one protocol revision encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkItemId {
    pub runtime_id: RuntimeId,
    /// Auxiliary data sent next to the runtime ID.
    pub aux: u16,
}

impl NetworkItemId {
    #[must_use]
    pub const fn new(runtime_id: RuntimeId, aux: u16) -> Self {
        Self { runtime_id, aux }
    }

    /// Packs runtime ID and aux into one event data word: `(id << 16) | aux`.
    ///
    /// Negative runtime IDs keep their two's complement bits.
    #[must_use]
    pub const fn packed(self) -> i32 {
        (self.runtime_id.raw() << 16) | self.aux as i32
    }
}
