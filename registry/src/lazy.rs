//! Init-once registry access.
//!
//! `LazyRegistry` defers loading until first use. Exactly one caller runs
//! the load; callers arriving meanwhile block until it finishes, and every
//! caller then sees the same outcome. A failed load is cached as well, so
//! the error is reported again instead of retrying.

use std::fmt;
use std::sync::OnceLock;

use dictionary::ItemTypeDictionary;
use protocol::ProtocolVersion;
use table::TableSource;

use crate::error::RegistryResult;
use crate::{DictionaryRegistry, RegistryConfig};

/// A registry that loads its tables on first access.
pub struct LazyRegistry {
    config: RegistryConfig,
    source: Box<dyn TableSource>,
    cell: OnceLock<RegistryResult<DictionaryRegistry>>,
}

impl LazyRegistry {
    #[must_use]
    pub fn new(config: RegistryConfig, source: impl TableSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
            cell: OnceLock::new(),
        }
    }

    /// Loads every declared table if that has not happened yet.
    ///
    /// Idempotent; the first call pays for loading and later calls return the
    /// cached registry (or the cached error).
    pub fn initialize(&self) -> RegistryResult<&DictionaryRegistry> {
        self.cell
            .get_or_init(|| {
                let result = DictionaryRegistry::load(&self.config, self.source.as_ref());
                match &result {
                    Ok(registry) => tracing::info!(
                        tables = registry.len(),
                        current = %registry.current_revision(),
                        "item dictionary registry ready"
                    ),
                    Err(err) => tracing::error!(
                        error = %err,
                        "item dictionary registry failed to initialize"
                    ),
                }
                result
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the dictionary for a canonical revision, initializing if needed.
    pub fn get(&self, canonical: ProtocolVersion) -> RegistryResult<&ItemTypeDictionary> {
        Ok(self.initialize()?.get(canonical))
    }

    /// Resolves a raw client revision and returns its dictionary.
    pub fn dictionary_for(&self, raw: ProtocolVersion) -> RegistryResult<&ItemTypeDictionary> {
        Ok(self.initialize()?.dictionary_for(raw))
    }

    /// Returns `true` once a load has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self.cell.get(), Some(Ok(_)))
    }

    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl fmt::Debug for LazyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.cell.get() {
            None => "pending",
            Some(Ok(_)) => "ready",
            Some(Err(_)) => "failed",
        };
        f.debug_struct("LazyRegistry")
            .field("config", &self.config)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<LazyRegistry> = OnceLock::new();

/// Installs the process-wide registry.
///
/// Only the first installation takes effect; a later one gets its registry
/// handed back in `Err`.
pub fn install_global(registry: LazyRegistry) -> Result<(), LazyRegistry> {
    GLOBAL.set(registry)
}

/// Returns the process-wide registry, if one was installed.
#[must_use]
pub fn global() -> Option<&'static LazyRegistry> {
    GLOBAL.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RegistryError, TableDecl};
    use table::{MemoryTableSource, TableError};

    fn config() -> RegistryConfig {
        RegistryConfig {
            resource_base: "items.json".to_string(),
            current: ProtocolVersion::new(2),
            tables: vec![
                TableDecl::new(ProtocolVersion::new(2), ""),
                TableDecl::new(ProtocolVersion::new(1), "-1"),
            ],
            aliases: Vec::new(),
        }
    }

    fn source() -> MemoryTableSource {
        MemoryTableSource::new()
            .with_table(
                "items.json",
                r#"{"minecraft:apple": {"runtime_id": 2, "component_based": false}}"#,
            )
            .with_table(
                "items-1.json",
                r#"{"minecraft:apple": {"runtime_id": 1, "component_based": false}}"#,
            )
    }

    #[test]
    fn initialize_is_lazy_and_idempotent() {
        let lazy = LazyRegistry::new(config(), source());
        assert!(!lazy.is_initialized());
        assert!(format!("{lazy:?}").contains("pending"));

        let first = lazy.initialize().unwrap();
        let second = lazy.initialize().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(lazy.is_initialized());
        assert!(format!("{lazy:?}").contains("ready"));
    }

    #[test]
    fn get_initializes_on_demand() {
        let lazy = LazyRegistry::new(config(), source());
        let dict = lazy.get(ProtocolVersion::new(1)).unwrap();
        assert_eq!(dict.runtime_id_of("minecraft:apple").unwrap().raw(), 1);
        let fallback = lazy.dictionary_for(ProtocolVersion::new(9)).unwrap();
        assert_eq!(fallback.runtime_id_of("minecraft:apple").unwrap().raw(), 2);
    }

    #[test]
    fn failure_is_cached() {
        let lazy = LazyRegistry::new(config(), MemoryTableSource::new());
        let first = lazy.initialize().unwrap_err();
        let second = lazy.initialize().unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first, RegistryError::Table(TableError::Read { .. })));
        assert!(!lazy.is_initialized());
        assert!(format!("{lazy:?}").contains("failed"));
        assert!(lazy.get(ProtocolVersion::new(2)).is_err());
    }
}
