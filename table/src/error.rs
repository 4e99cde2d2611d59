//! Table loading errors.

use std::io;

use protocol::ProtocolVersion;
use thiserror::Error;

/// Result type for table loading.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while reading or parsing an item table.
///
/// Both kinds point at a broken deployment or data file; neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TableError {
    /// The resource could not be read.
    #[error("failed to read item table {resource} for protocol {protocol}: {message}")]
    Read {
        protocol: ProtocolVersion,
        resource: String,
        kind: io::ErrorKind,
        message: String,
    },

    /// The resource was read but does not have the expected shape.
    #[error("malformed item table {resource} for protocol {protocol}: {reason}")]
    Malformed {
        protocol: ProtocolVersion,
        resource: String,
        reason: MalformedReason,
    },
}

impl TableError {
    pub(crate) fn read(protocol: ProtocolVersion, resource: &str, err: &io::Error) -> Self {
        Self::Read {
            protocol,
            resource: resource.to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// The protocol revision whose table failed.
    #[must_use]
    pub const fn protocol(&self) -> ProtocolVersion {
        match self {
            Self::Read { protocol, .. } | Self::Malformed { protocol, .. } => *protocol,
        }
    }
}

/// What was wrong with a malformed table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Not valid JSON (including invalid UTF-8).
    #[error("invalid json at line {line} column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// The document is valid JSON but its top level is not an object.
    #[error("expected an object of item entries: {message}")]
    TopLevelNotObject { message: String },

    /// An entry's value is not an object.
    #[error("entry {identifier:?}: expected an object, found {found}")]
    EntryNotObject {
        identifier: String,
        found: &'static str,
    },

    /// An entry lacks a required field.
    #[error("entry {identifier:?}: missing field `{field}`")]
    MissingField {
        identifier: String,
        field: &'static str,
    },

    /// A field has the wrong JSON type.
    #[error("entry {identifier:?}: field `{field}` expected {expected}, found {found}")]
    WrongFieldType {
        identifier: String,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The runtime ID is an integer that does not fit the wire type.
    #[error("entry {identifier:?}: runtime id {value} out of range")]
    RuntimeIdOutOfRange { identifier: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_protocol_and_resource() {
        let err = TableError::Malformed {
            protocol: ProtocolVersion::V1_20_0,
            resource: "required_item_list-1.20.0.json".to_string(),
            reason: MalformedReason::MissingField {
                identifier: "minecraft:apple".to_string(),
                field: "runtime_id",
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("589"));
        assert!(msg.contains("required_item_list-1.20.0.json"));
        assert!(msg.contains("missing field `runtime_id`"));
        assert_eq!(err.protocol(), ProtocolVersion::V1_20_0);
    }

    #[test]
    fn read_error_keeps_io_kind() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = TableError::read(ProtocolVersion::CURRENT, "x.json", &io_err);
        assert!(matches!(
            err,
            TableError::Read {
                kind: io::ErrorKind::NotFound,
                ..
            }
        ));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn wrong_type_display() {
        let reason = MalformedReason::WrongFieldType {
            identifier: "minecraft:apple".to_string(),
            field: "component_based",
            expected: "a boolean",
            found: "string",
        };
        let msg = reason.to_string();
        assert!(msg.contains("component_based"));
        assert!(msg.contains("a boolean"));
        assert!(msg.contains("string"));
    }
}
