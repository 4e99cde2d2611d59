//! The loaded, immutable revision → dictionary mapping.

use std::collections::BTreeMap;

use dictionary::ItemTypeDictionary;
use protocol::{
    group_by_canonical_protocol, ProtocolConnection, ProtocolResolver, ProtocolVersion,
};
use table::{load_table, TableSource};

use crate::error::{RegistryError, RegistryResult};
use crate::RegistryConfig;

/// Every declared revision's dictionary plus the rules that pick one.
///
/// Nothing here changes after construction. Lookups never fail: a revision
/// without a dedicated table is served the current revision's table.
#[derive(Debug, Clone)]
pub struct DictionaryRegistry {
    current_revision: ProtocolVersion,
    current: ItemTypeDictionary,
    others: BTreeMap<ProtocolVersion, ItemTypeDictionary>,
    resolver: ProtocolResolver,
}

impl DictionaryRegistry {
    /// Loads and validates every declared table.
    ///
    /// The first failing table aborts the whole load; no partial registry is
    /// ever returned.
    pub fn load<S>(config: &RegistryConfig, source: &S) -> RegistryResult<Self>
    where
        S: TableSource + ?Sized,
    {
        let resolver = config.validate()?;

        let mut dictionaries = BTreeMap::new();
        for decl in &config.tables {
            let resource = decl.resource(&config.resource_base);
            let entries = load_table(source, decl.protocol, &resource)?;
            let dictionary =
                ItemTypeDictionary::new(entries).map_err(|err| RegistryError::Dictionary {
                    protocol: decl.protocol,
                    resource: resource.clone(),
                    source: err,
                })?;
            tracing::info!(
                protocol = %decl.protocol,
                resource = %resource,
                items = dictionary.len(),
                "loaded item dictionary"
            );
            dictionaries.insert(decl.protocol, dictionary);
        }

        Self::from_dictionaries(config.current, resolver, dictionaries)
    }

    /// Builds a registry from dictionaries that were constructed elsewhere.
    pub fn from_dictionaries(
        current_revision: ProtocolVersion,
        resolver: ProtocolResolver,
        mut dictionaries: BTreeMap<ProtocolVersion, ItemTypeDictionary>,
    ) -> RegistryResult<Self> {
        let current = dictionaries
            .remove(&current_revision)
            .ok_or(RegistryError::MissingCurrentTable {
                current: current_revision,
            })?;
        Ok(Self {
            current_revision,
            current,
            others: dictionaries,
            resolver,
        })
    }

    /// Returns the dictionary for a canonical revision, or the current one.
    #[must_use]
    pub fn get(&self, canonical: ProtocolVersion) -> &ItemTypeDictionary {
        self.get_exact(canonical).unwrap_or_else(|| {
            tracing::trace!(
                protocol = %canonical,
                current = %self.current_revision,
                "no dedicated item table; using current"
            );
            &self.current
        })
    }

    /// Returns the dictionary only if `canonical` has a dedicated table.
    #[must_use]
    pub fn get_exact(&self, canonical: ProtocolVersion) -> Option<&ItemTypeDictionary> {
        if canonical == self.current_revision {
            Some(&self.current)
        } else {
            self.others.get(&canonical)
        }
    }

    /// Resolves a raw client revision and returns the dictionary to use for it.
    #[must_use]
    pub fn dictionary_for(&self, raw: ProtocolVersion) -> &ItemTypeDictionary {
        self.get(self.resolve(raw))
    }

    #[must_use]
    pub fn resolve(&self, raw: ProtocolVersion) -> ProtocolVersion {
        self.resolver.resolve(raw)
    }

    #[must_use]
    pub const fn resolver(&self) -> &ProtocolResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn current(&self) -> &ItemTypeDictionary {
        &self.current
    }

    #[must_use]
    pub const fn current_revision(&self) -> ProtocolVersion {
        self.current_revision
    }

    /// Revisions with a dedicated table, in ascending order.
    pub fn revisions(&self) -> impl Iterator<Item = ProtocolVersion> + '_ {
        let mut revisions: Vec<ProtocolVersion> = self.others.keys().copied().collect();
        let at = revisions.partition_point(|rev| *rev < self.current_revision);
        revisions.insert(at, self.current_revision);
        revisions.into_iter()
    }

    /// Number of dedicated tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.others.len() + 1
    }

    /// Always `false`: a registry holds at least the current table.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Groups connections by canonical revision using this registry's rules.
    pub fn group_connections<C, I>(&self, connections: I) -> BTreeMap<ProtocolVersion, Vec<C>>
    where
        C: ProtocolConnection,
        I: IntoIterator<Item = C>,
    {
        group_by_canonical_protocol(&self.resolver, connections)
    }
}
