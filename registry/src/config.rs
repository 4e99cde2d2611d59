//! Declared table set and aliasing rules.

use std::collections::HashSet;

use protocol::{AliasRule, ProtocolResolver, ProtocolVersion};
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Base resource name of the shipped Bedrock item tables.
pub const BEDROCK_RESOURCE_BASE: &str = "required_item_list.json";

/// One supported revision and the suffix of its table resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDecl {
    pub protocol: ProtocolVersion,
    /// Inserted before the extension of the base name; empty for the current revision.
    #[serde(default)]
    pub suffix: String,
}

impl TableDecl {
    #[must_use]
    pub fn new(protocol: ProtocolVersion, suffix: impl Into<String>) -> Self {
        Self {
            protocol,
            suffix: suffix.into(),
        }
    }

    /// The full resource name for this table.
    #[must_use]
    pub fn resource(&self, base: &str) -> String {
        table::resource_name(base, &self.suffix)
    }
}

/// Registry configuration.
///
/// Supporting a new client release means appending a `TableDecl` (and any
/// alias rules) and shipping the table; no code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Base resource name, e.g. `required_item_list.json`.
    pub resource_base: String,
    /// Revision whose table serves any revision without its own.
    pub current: ProtocolVersion,
    /// Declared tables, loaded in this order.
    pub tables: Vec<TableDecl>,
    /// Alias rules, evaluated in this order.
    #[serde(default)]
    pub aliases: Vec<AliasRule>,
}

impl RegistryConfig {
    /// The table set shipped for Bedrock clients.
    #[must_use]
    pub fn bedrock() -> Self {
        let decl = TableDecl::new;
        Self {
            resource_base: BEDROCK_RESOURCE_BASE.to_string(),
            current: ProtocolVersion::CURRENT,
            tables: vec![
                decl(ProtocolVersion::CURRENT, ""),
                decl(ProtocolVersion::V1_20_0, "-1.20.0"),
                decl(ProtocolVersion::V1_19_80, "-1.19.80"),
                decl(ProtocolVersion::V1_19_70, "-1.19.70"),
                decl(ProtocolVersion::V1_19_63, "-1.19.63"),
                decl(ProtocolVersion::V1_19_50, "-1.19.50"),
                decl(ProtocolVersion::V1_19_40, "-1.19.40"),
                decl(ProtocolVersion::V1_19_0, "-1.19.0"),
                decl(ProtocolVersion::V1_18_30, "-1.18.30"),
                decl(ProtocolVersion::V1_18_10, "-1.18.10"),
            ],
            aliases: ProtocolResolver::bedrock_rules(),
        }
    }

    /// Checks the table set and builds the resolver.
    pub fn validate(&self) -> RegistryResult<ProtocolResolver> {
        let mut seen = HashSet::with_capacity(self.tables.len());
        for decl in &self.tables {
            if !seen.insert(decl.protocol) {
                return Err(RegistryError::DuplicateTable {
                    protocol: decl.protocol,
                });
            }
        }
        if !seen.contains(&self.current) {
            return Err(RegistryError::MissingCurrentTable {
                current: self.current,
            });
        }

        let resolver = ProtocolResolver::new(self.aliases.clone())?;
        for rule in resolver.rules() {
            let target = match *rule {
                AliasRule::Exact { to, .. } | AliasRule::Range { to, .. } => to,
            };
            if !seen.contains(&target) {
                tracing::warn!(
                    %target,
                    current = %self.current,
                    "alias target has no table; clients will get the current table"
                );
            }
        }
        Ok(resolver)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::bedrock()
    }
}
