//! Validation and lookup tools for netid item tables.
//!
//! This crate backs the `netid-tools` binary:
//!
//! - Validate every declared table before shipping a release
//! - Show which table a client revision is served
//! - Look up an item in the table a revision resolves to
//!
//! # Design Principles
//!
//! - **Same code path as the server** - Tools load through `DictionaryRegistry`.
//! - **Human-readable output** - Plain text by default, JSON on request.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use dictionary::{ItemTypeEntry, RuntimeId};
use protocol::ProtocolVersion;
use registry::{DictionaryRegistry, RegistryConfig};
use serde::Serialize;
use table::TableSource;

/// Loads a registry configuration from JSON, or the built-in Bedrock one.
pub fn load_config(path: Option<&Path>) -> Result<RegistryConfig> {
    let Some(path) = path else {
        return Ok(RegistryConfig::bedrock());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&contents).context("parse config json")
}

/// Per-revision summary of a validated table set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub protocol: ProtocolVersion,
    pub resource: String,
    pub items: usize,
    pub component_based: usize,
    pub current: bool,
}

/// Loads every declared table through the registry and summarizes it.
pub fn validate_tables<S>(config: &RegistryConfig, source: &S) -> Result<Vec<TableReport>>
where
    S: TableSource + ?Sized,
{
    let registry = DictionaryRegistry::load(config, source).context("item tables are invalid")?;
    let reports = config
        .tables
        .iter()
        .map(|decl| {
            let dictionary = registry.get(decl.protocol);
            TableReport {
                protocol: decl.protocol,
                resource: decl.resource(&config.resource_base),
                items: dictionary.len(),
                component_based: dictionary.iter().filter(|e| e.component_based).count(),
                current: decl.protocol == config.current,
            }
        })
        .collect();
    Ok(reports)
}

/// What to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Identifier(String),
    RuntimeId(RuntimeId),
}

/// Result of a lookup against the table a revision resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    pub requested: ProtocolVersion,
    pub canonical: ProtocolVersion,
    /// `false` when the canonical revision has no table and the current one was used.
    pub dedicated_table: bool,
    pub entry: Option<ItemTypeEntry>,
}

/// Resolves `requested`, then looks `key` up in the served dictionary.
pub fn lookup(
    registry: &DictionaryRegistry,
    requested: ProtocolVersion,
    key: &LookupKey,
) -> LookupReport {
    let canonical = registry.resolve(requested);
    let dictionary = registry.get(canonical);
    let entry = match key {
        LookupKey::Identifier(identifier) => dictionary.find_by_identifier(identifier),
        LookupKey::RuntimeId(runtime_id) => dictionary.find_by_runtime_id(*runtime_id),
    };
    LookupReport {
        requested,
        canonical,
        dedicated_table: registry.get_exact(canonical).is_some(),
        entry: entry.cloned(),
    }
}

/// Renders validation reports as aligned text.
#[must_use]
pub fn format_reports(reports: &[TableReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let marker = if report.current { " (current)" } else { "" };
        let _ = writeln!(
            out,
            "protocol {:>4}{marker}: {} items, {} component-based [{}]",
            report.protocol, report.items, report.component_based, report.resource
        );
    }
    out
}
