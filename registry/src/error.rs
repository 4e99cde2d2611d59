//! Registry errors.

use dictionary::DictionaryError;
use protocol::{ProtocolVersion, ResolverError};
use table::TableError;
use thiserror::Error;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that prevent the registry from being built.
///
/// All of them are fatal: a server without a complete, valid set of tables
/// must not accept connections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The configured current revision has no declared table.
    #[error("no item table declared for current protocol {current}")]
    MissingCurrentTable { current: ProtocolVersion },

    /// A revision is declared more than once.
    #[error("item table for protocol {protocol} declared more than once")]
    DuplicateTable { protocol: ProtocolVersion },

    /// The alias rules are invalid.
    #[error("invalid protocol alias rules: {0}")]
    Resolver(#[from] ResolverError),

    /// A table could not be read or is malformed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A table's entries are not a bijection.
    #[error("item table {resource} for protocol {protocol}: {source}")]
    Dictionary {
        protocol: ProtocolVersion,
        resource: String,
        source: DictionaryError,
    },
}

impl RegistryError {
    /// Returns `true` for structural table errors.
    #[must_use]
    pub const fn is_malformed_table(&self) -> bool {
        matches!(self, Self::Table(TableError::Malformed { .. }))
    }

    /// Returns `true` when a table repeats an identifier or runtime ID.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::Dictionary { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictionary::RuntimeId;
    use table::MalformedReason;

    #[test]
    fn dictionary_error_display_includes_context() {
        let err = RegistryError::Dictionary {
            protocol: ProtocolVersion::V1_19_0,
            resource: "items-1.19.0.json".to_string(),
            source: DictionaryError::DuplicateRuntimeId {
                runtime_id: RuntimeId::new(3),
                first: "minecraft:a".to_string(),
                second: "minecraft:b".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("527"));
        assert!(msg.contains("items-1.19.0.json"));
        assert!(msg.contains("duplicate runtime id 3"));
        assert!(err.is_duplicate_key());
        assert!(!err.is_malformed_table());
    }

    #[test]
    fn table_error_is_transparent() {
        let err = RegistryError::from(TableError::Malformed {
            protocol: ProtocolVersion::CURRENT,
            resource: "items.json".to_string(),
            reason: MalformedReason::TopLevelNotObject {
                message: "invalid type".to_string(),
            },
        });
        assert!(err.to_string().starts_with("malformed item table items.json"));
        assert!(err.is_malformed_table());
    }

    #[test]
    fn missing_current_display() {
        let err = RegistryError::MissingCurrentTable {
            current: ProtocolVersion::new(700),
        };
        assert!(err.to_string().contains("700"));
    }
}
