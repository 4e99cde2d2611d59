//! Bidirectional identifier/runtime ID lookup for one protocol revision.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{DictionaryError, DictionaryResult};
use crate::{ItemTypeEntry, RuntimeId};

/// One protocol revision's complete item table.
///
/// Built once from validated entries and never mutated afterwards, so a
/// shared reference can be read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTypeDictionary {
    entries: Vec<ItemTypeEntry>,
    by_identifier: HashMap<String, usize>,
    by_runtime_id: HashMap<RuntimeId, usize>,
}

impl ItemTypeDictionary {
    /// Builds a dictionary, rejecting duplicate identifiers or runtime IDs.
    pub fn new(entries: Vec<ItemTypeEntry>) -> DictionaryResult<Self> {
        let mut by_identifier = HashMap::with_capacity(entries.len());
        let mut by_runtime_id = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            match by_identifier.entry(entry.identifier.clone()) {
                Entry::Occupied(_) => {
                    return Err(DictionaryError::DuplicateIdentifier {
                        identifier: entry.identifier.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            match by_runtime_id.entry(entry.runtime_id) {
                Entry::Occupied(existing) => {
                    let first: &ItemTypeEntry = &entries[*existing.get()];
                    return Err(DictionaryError::DuplicateRuntimeId {
                        runtime_id: entry.runtime_id,
                        first: first.identifier.clone(),
                        second: entry.identifier.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        Ok(Self {
            entries,
            by_identifier,
            by_runtime_id,
        })
    }

    /// Finds the entry with the given string identifier.
    #[must_use]
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&ItemTypeEntry> {
        self.by_identifier
            .get(identifier)
            .map(|&index| &self.entries[index])
    }

    /// Finds the entry with the given runtime ID.
    #[must_use]
    pub fn find_by_runtime_id(&self, runtime_id: RuntimeId) -> Option<&ItemTypeEntry> {
        self.by_runtime_id
            .get(&runtime_id)
            .map(|&index| &self.entries[index])
    }

    #[must_use]
    pub fn runtime_id_of(&self, identifier: &str) -> Option<RuntimeId> {
        self.find_by_identifier(identifier).map(|e| e.runtime_id)
    }

    #[must_use]
    pub fn identifier_of(&self, runtime_id: RuntimeId) -> Option<&str> {
        self.find_by_runtime_id(runtime_id)
            .map(|e| e.identifier.as_str())
    }

    /// Entries in the order they were declared.
    #[must_use]
    pub fn entries(&self) -> &[ItemTypeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemTypeEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ItemTypeDictionary {
    type Item = &'a ItemTypeEntry;
    type IntoIter = std::slice::Iter<'a, ItemTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str, runtime_id: i32) -> ItemTypeEntry {
        ItemTypeEntry::new(identifier, RuntimeId::new(runtime_id), false)
    }

    fn sample() -> ItemTypeDictionary {
        ItemTypeDictionary::new(vec![
            entry("minecraft:apple", 257),
            entry("minecraft:bread", 261),
            ItemTypeEntry::new("custom:ruby", RuntimeId::new(-40), true),
        ])
        .unwrap()
    }

    #[test]
    fn lookups_in_both_directions() {
        let dict = sample();
        let apple = dict.find_by_identifier("minecraft:apple").unwrap();
        assert_eq!(apple.runtime_id, RuntimeId::new(257));
        let ruby = dict.find_by_runtime_id(RuntimeId::new(-40)).unwrap();
        assert_eq!(ruby.identifier, "custom:ruby");
        assert!(ruby.component_based);
    }

    #[test]
    fn misses_are_none() {
        let dict = sample();
        assert!(dict.find_by_identifier("minecraft:cake").is_none());
        assert!(dict.find_by_runtime_id(RuntimeId::new(0)).is_none());
        assert_eq!(dict.runtime_id_of("minecraft:cake"), None);
        assert_eq!(dict.identifier_of(RuntimeId::new(1)), None);
    }

    #[test]
    fn convenience_accessors() {
        let dict = sample();
        assert_eq!(
            dict.runtime_id_of("minecraft:bread"),
            Some(RuntimeId::new(261))
        );
        assert_eq!(
            dict.identifier_of(RuntimeId::new(257)),
            Some("minecraft:apple")
        );
    }

    #[test]
    fn entries_keep_declaration_order() {
        let dict = sample();
        let names: Vec<_> = dict.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(names, ["minecraft:apple", "minecraft:bread", "custom:ruby"]);
        assert_eq!(dict.len(), 3);
        assert!(!dict.is_empty());
        assert_eq!((&dict).into_iter().count(), 3);
    }

    #[test]
    fn empty_dictionary_is_valid() {
        let dict = ItemTypeDictionary::new(Vec::new()).unwrap();
        assert!(dict.is_empty());
        assert!(dict.entries().is_empty());
    }

    #[test]
    fn rejects_duplicate_identifier() {
        let err = ItemTypeDictionary::new(vec![entry("minecraft:apple", 1), entry("minecraft:apple", 2)])
            .unwrap_err();
        assert_eq!(
            err,
            DictionaryError::DuplicateIdentifier {
                identifier: "minecraft:apple".to_string()
            }
        );
    }

    #[test]
    fn rejects_duplicate_runtime_id() {
        let err = ItemTypeDictionary::new(vec![
            entry("minecraft:apple", 5),
            entry("minecraft:bread", 6),
            entry("minecraft:cake", 5),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DictionaryError::DuplicateRuntimeId {
                runtime_id: RuntimeId::new(5),
                first: "minecraft:apple".to_string(),
                second: "minecraft:cake".to_string(),
            }
        );
    }

    #[test]
    fn dictionary_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ItemTypeDictionary>();
    }
}
