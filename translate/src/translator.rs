//! Translating items to and from one revision's wire IDs.

use std::collections::HashMap;

use dictionary::ItemTypeDictionary;

use crate::{LocalItem, NetworkItemId};

/// Converts between server items and a revision's wire IDs.
///
/// Callers must pass the dictionary resolved for the recipient's protocol
/// revision; a miss (`None`) is normal for items an older client lacks.
pub trait ItemTranslator: Send + Sync {
    fn to_network_id(
        &self,
        dictionary: &ItemTypeDictionary,
        item: &LocalItem,
    ) -> Option<NetworkItemId>;

    fn from_network_id(
        &self,
        dictionary: &ItemTypeDictionary,
        id: NetworkItemId,
    ) -> Option<LocalItem>;
}

/// Looks identifiers up directly and carries `meta` as the aux value.
///
/// Items whose server identifier differs from the wire identifier can be
/// registered with [`MetaTranslator::with_rename`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTranslator {
    to_network: HashMap<String, String>,
    to_local: HashMap<String, String>,
}

impl MetaTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a server identifier to a different wire identifier (both ways).
    #[must_use]
    pub fn with_rename(mut self, local: impl Into<String>, network: impl Into<String>) -> Self {
        let (local, network) = (local.into(), network.into());
        self.to_local.insert(network.clone(), local.clone());
        self.to_network.insert(local, network);
        self
    }

    fn network_identifier<'a>(&'a self, local: &'a str) -> &'a str {
        self.to_network.get(local).map_or(local, String::as_str)
    }

    fn local_identifier<'a>(&'a self, network: &'a str) -> &'a str {
        self.to_local.get(network).map_or(network, String::as_str)
    }
}

impl ItemTranslator for MetaTranslator {
    fn to_network_id(
        &self,
        dictionary: &ItemTypeDictionary,
        item: &LocalItem,
    ) -> Option<NetworkItemId> {
        let entry = dictionary.find_by_identifier(self.network_identifier(&item.identifier))?;
        Some(NetworkItemId::new(entry.runtime_id, item.meta))
    }

    fn from_network_id(
        &self,
        dictionary: &ItemTypeDictionary,
        id: NetworkItemId,
    ) -> Option<LocalItem> {
        let entry = dictionary.find_by_runtime_id(id.runtime_id)?;
        Some(LocalItem::new(self.local_identifier(&entry.identifier), id.aux))
    }
}
