//! Per-protocol item dictionaries for netid.
//!
//! An item dictionary is one protocol revision's bijection between stable
//! string identifiers and wire runtime IDs:
//! - `ItemTypeEntry` records (identifier, runtime ID, component flag)
//! - `ItemTypeDictionary` with O(1) lookups in both directions
//! - Duplicate-key validation at build time
//!
//! # Design Principles
//!
//! - **Validate once** - Bijection violations fail construction, never a lookup.
//! - **Immutable after build** - No mutation API; shared reads need no locking.

mod dictionary;
mod entry;
mod error;

pub use dictionary::ItemTypeDictionary;
pub use entry::{ItemTypeEntry, RuntimeId};
pub use error::{DictionaryError, DictionaryResult};
