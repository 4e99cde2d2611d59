//! Strict item table parsing.
//!
//! A table is a JSON object mapping item identifiers to
//! `{"runtime_id": <int>, "component_based": <bool>}`. Every deviation is a
//! `MalformedReason`; nothing is coerced or skipped.

use std::fmt;

use dictionary::{ItemTypeEntry, RuntimeId};
use protocol::ProtocolVersion;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};

use crate::error::{MalformedReason, TableError, TableResult};
use crate::TableSource;

/// Field holding the wire ID.
pub const RUNTIME_ID_FIELD: &str = "runtime_id";

/// Field holding the component flag.
pub const COMPONENT_BASED_FIELD: &str = "component_based";

/// Top-level object entries in document order, duplicates included.
///
/// `serde_json::Map` keeps only the last value for a repeated key, which
/// would hide a duplicated identifier from dictionary validation.
struct RawTable(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawTableVisitor)
    }
}

struct RawTableVisitor;

impl<'de> Visitor<'de> for RawTableVisitor {
    type Value = RawTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of item entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((identifier, value)) = map.next_entry::<String, Value>()? {
            entries.push((identifier, value));
        }
        Ok(RawTable(entries))
    }
}

/// Parses raw table bytes into entries, in document order.
///
/// Duplicate identifiers are returned as-is; building the dictionary is what
/// rejects them.
pub fn parse_table(
    protocol: ProtocolVersion,
    resource: &str,
    bytes: &[u8],
) -> TableResult<Vec<ItemTypeEntry>> {
    let malformed = |reason| TableError::Malformed {
        protocol,
        resource: resource.to_string(),
        reason,
    };

    let RawTable(raw) =
        serde_json::from_slice::<RawTable>(bytes).map_err(|err| malformed(json_reason(&err)))?;

    raw.into_iter()
        .map(|(identifier, value)| parse_entry(identifier, &value).map_err(malformed))
        .collect()
}

/// Reads `resource` from `source` and parses it.
pub fn load_table<S>(
    source: &S,
    protocol: ProtocolVersion,
    resource: &str,
) -> TableResult<Vec<ItemTypeEntry>>
where
    S: TableSource + ?Sized,
{
    let bytes = source
        .read(resource)
        .map_err(|err| TableError::read(protocol, resource, &err))?;
    let entries = parse_table(protocol, resource, &bytes)?;
    tracing::debug!(
        %protocol,
        resource,
        bytes = bytes.len(),
        entries = entries.len(),
        "parsed item table"
    );
    Ok(entries)
}

fn json_reason(err: &serde_json::Error) -> MalformedReason {
    match err.classify() {
        serde_json::error::Category::Data => MalformedReason::TopLevelNotObject {
            message: err.to_string(),
        },
        _ => MalformedReason::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        },
    }
}

fn parse_entry(identifier: String, value: &Value) -> Result<ItemTypeEntry, MalformedReason> {
    let Value::Object(fields) = value else {
        return Err(MalformedReason::EntryNotObject {
            identifier,
            found: json_type(value),
        });
    };

    let runtime_id = match runtime_id_field(fields) {
        Ok(id) => id,
        Err(reason) => return Err(reason.with_identifier(identifier)),
    };
    let component_based = match component_based_field(fields) {
        Ok(flag) => flag,
        Err(reason) => return Err(reason.with_identifier(identifier)),
    };

    Ok(ItemTypeEntry {
        identifier,
        runtime_id,
        component_based,
    })
}

/// Field-level failure before the identifier is attached.
enum FieldError {
    Missing(&'static str),
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    OutOfRange(String),
}

impl FieldError {
    fn with_identifier(self, identifier: String) -> MalformedReason {
        match self {
            Self::Missing(field) => MalformedReason::MissingField { identifier, field },
            Self::WrongType {
                field,
                expected,
                found,
            } => MalformedReason::WrongFieldType {
                identifier,
                field,
                expected,
                found,
            },
            Self::OutOfRange(value) => MalformedReason::RuntimeIdOutOfRange { identifier, value },
        }
    }
}

fn runtime_id_field(fields: &Map<String, Value>) -> Result<RuntimeId, FieldError> {
    let value = fields
        .get(RUNTIME_ID_FIELD)
        .ok_or(FieldError::Missing(RUNTIME_ID_FIELD))?;
    let Value::Number(number) = value else {
        return Err(FieldError::WrongType {
            field: RUNTIME_ID_FIELD,
            expected: "an integer",
            found: json_type(value),
        });
    };
    if number.is_f64() {
        return Err(FieldError::WrongType {
            field: RUNTIME_ID_FIELD,
            expected: "an integer",
            found: "float",
        });
    }
    number
        .as_i64()
        .and_then(|raw| i32::try_from(raw).ok())
        .map(RuntimeId::new)
        .ok_or_else(|| FieldError::OutOfRange(number.to_string()))
}

fn component_based_field(fields: &Map<String, Value>) -> Result<bool, FieldError> {
    let value = fields
        .get(COMPONENT_BASED_FIELD)
        .ok_or(FieldError::Missing(COMPONENT_BASED_FIELD))?;
    value.as_bool().ok_or_else(|| FieldError::WrongType {
        field: COMPONENT_BASED_FIELD,
        expected: "a boolean",
        found: json_type(value),
    })
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TableResult<Vec<ItemTypeEntry>> {
        parse_table(ProtocolVersion::CURRENT, "items.json", json.as_bytes())
    }

    fn reason(json: &str) -> MalformedReason {
        match parse(json).unwrap_err() {
            TableError::Malformed { reason, .. } => reason,
            other => panic!("expected malformed table, got {other:?}"),
        }
    }

    #[test]
    fn parses_entries_in_document_order() {
        let entries = parse(
            r#"{
                "minecraft:stone": {"runtime_id": 1, "component_based": false},
                "minecraft:apple": {"runtime_id": 257, "component_based": false},
                "custom:ruby": {"runtime_id": -12, "component_based": true, "version": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![
                ItemTypeEntry::new("minecraft:stone", RuntimeId::new(1), false),
                ItemTypeEntry::new("minecraft:apple", RuntimeId::new(257), false),
                ItemTypeEntry::new("custom:ruby", RuntimeId::new(-12), true),
            ]
        );
    }

    #[test]
    fn empty_object_is_empty_table() {
        assert!(parse("{}").unwrap().is_empty());
    }

    #[test]
    fn keeps_duplicate_identifiers() {
        let entries = parse(
            r#"{
                "minecraft:apple": {"runtime_id": 1, "component_based": false},
                "minecraft:apple": {"runtime_id": 2, "component_based": false}
            }"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].runtime_id, RuntimeId::new(1));
        assert_eq!(entries[1].runtime_id, RuntimeId::new(2));
    }

    #[test]
    fn rejects_non_object_top_level() {
        assert!(matches!(
            reason("[1, 2, 3]"),
            MalformedReason::TopLevelNotObject { .. }
        ));
        assert!(matches!(
            reason("42"),
            MalformedReason::TopLevelNotObject { .. }
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            reason("{\"minecraft:apple\": "),
            MalformedReason::InvalidJson { .. }
        ));
        let err = parse_table(ProtocolVersion::CURRENT, "items.json", &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(
            err,
            TableError::Malformed {
                reason: MalformedReason::InvalidJson { .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_entry_that_is_not_object() {
        assert_eq!(
            reason(r#"{"minecraft:apple": 257}"#),
            MalformedReason::EntryNotObject {
                identifier: "minecraft:apple".to_string(),
                found: "number",
            }
        );
    }

    #[test]
    fn rejects_missing_runtime_id() {
        assert_eq!(
            reason(r#"{"minecraft:apple": {"component_based": false}}"#),
            MalformedReason::MissingField {
                identifier: "minecraft:apple".to_string(),
                field: RUNTIME_ID_FIELD,
            }
        );
    }

    #[test]
    fn rejects_missing_component_based() {
        assert_eq!(
            reason(r#"{"minecraft:apple": {"runtime_id": 257}}"#),
            MalformedReason::MissingField {
                identifier: "minecraft:apple".to_string(),
                field: COMPONENT_BASED_FIELD,
            }
        );
    }

    #[test]
    fn rejects_non_integer_runtime_id() {
        assert_eq!(
            reason(r#"{"minecraft:apple": {"runtime_id": "257", "component_based": false}}"#),
            MalformedReason::WrongFieldType {
                identifier: "minecraft:apple".to_string(),
                field: RUNTIME_ID_FIELD,
                expected: "an integer",
                found: "string",
            }
        );
        assert!(matches!(
            reason(r#"{"minecraft:apple": {"runtime_id": 2.5, "component_based": false}}"#),
            MalformedReason::WrongFieldType { found: "float", .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_runtime_id() {
        assert_eq!(
            reason(r#"{"minecraft:apple": {"runtime_id": 4294967296, "component_based": false}}"#),
            MalformedReason::RuntimeIdOutOfRange {
                identifier: "minecraft:apple".to_string(),
                value: "4294967296".to_string(),
            }
        );
        assert!(matches!(
            reason(
                r#"{"minecraft:apple": {"runtime_id": 18446744073709551615, "component_based": false}}"#
            ),
            MalformedReason::RuntimeIdOutOfRange { .. }
        ));
    }

    #[test]
    fn rejects_non_boolean_component_based() {
        assert_eq!(
            reason(r#"{"minecraft:apple": {"runtime_id": 257, "component_based": 0}}"#),
            MalformedReason::WrongFieldType {
                identifier: "minecraft:apple".to_string(),
                field: COMPONENT_BASED_FIELD,
                expected: "a boolean",
                found: "number",
            }
        );
    }

    #[test]
    fn null_fields_are_wrong_type_not_missing() {
        assert!(matches!(
            reason(r#"{"minecraft:apple": {"runtime_id": null, "component_based": false}}"#),
            MalformedReason::WrongFieldType { found: "null", .. }
        ));
    }

    #[test]
    fn malformed_error_carries_context() {
        let err = parse_table(ProtocolVersion::V1_19_50, "items-1.19.50.json", b"[]").unwrap_err();
        match err {
            TableError::Malformed {
                protocol, resource, ..
            } => {
                assert_eq!(protocol, ProtocolVersion::V1_19_50);
                assert_eq!(resource, "items-1.19.50.json");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
