//! Dictionary construction errors.

use thiserror::Error;

use crate::RuntimeId;

/// Result type for dictionary construction.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Duplicate-key errors raised while building a dictionary.
///
/// Either variant means the table is not a bijection and cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Two entries share a string identifier.
    #[error("duplicate item identifier {identifier:?}")]
    DuplicateIdentifier { identifier: String },

    /// Two entries share a runtime ID.
    #[error("duplicate runtime id {runtime_id}: {first:?} and {second:?}")]
    DuplicateRuntimeId {
        runtime_id: RuntimeId,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_identifier_display() {
        let err = DictionaryError::DuplicateIdentifier {
            identifier: "minecraft:apple".to_string(),
        };
        assert!(err.to_string().contains("\"minecraft:apple\""));
    }

    #[test]
    fn duplicate_runtime_id_display() {
        let err = DictionaryError::DuplicateRuntimeId {
            runtime_id: RuntimeId::new(12),
            first: "minecraft:a".to_string(),
            second: "minecraft:b".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("minecraft:a"));
        assert!(msg.contains("minecraft:b"));
    }
}
