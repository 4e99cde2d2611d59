//! Process-wide per-protocol item dictionary registry for netid.
//!
//! The registry owns one `ItemTypeDictionary` per declared protocol
//! revision and is the entry point for encoders that need wire item IDs:
//! - `RegistryConfig` declares tables and alias rules (serde, JSON)
//! - `DictionaryRegistry` loads every table and serves lookups
//! - `LazyRegistry` builds it exactly once, on first use
//! - A process-wide slot (`install_global` / `global`)
//!
//! # Design Principles
//!
//! - **All or nothing** - One bad table aborts the load; nothing partial is served.
//! - **Immutable after init** - Lookups take no locks.
//! - **Degrade, don't fail** - A revision without a table gets the current table.

mod config;
mod error;
mod lazy;
mod registry;

pub use config::{RegistryConfig, TableDecl, BEDROCK_RESOURCE_BASE};
pub use error::{RegistryError, RegistryResult};
pub use lazy::{global, install_global, LazyRegistry};
pub use registry::DictionaryRegistry;
