//! Item table resources and strict table parsing for netid.
//!
//! Each supported protocol revision ships one JSON item table. This crate
//! turns a table resource into validated `ItemTypeEntry` records:
//! - `TableSource` abstraction over where bytes come from (directory, memory)
//! - Revision-specific resource naming
//! - Exhaustive shape validation with diagnosable errors
//!
//! # Design Principles
//!
//! - **Fail fast** - Any structural deviation is a `TableError::Malformed`.
//! - **Nothing hidden** - Repeated identifiers reach dictionary validation.
//! - **No I/O policy** - Sources only read bytes; there is no retry.

mod error;
mod parse;
mod source;

pub use error::{MalformedReason, TableError, TableResult};
pub use parse::{load_table, parse_table, COMPONENT_BASED_FIELD, RUNTIME_ID_FIELD};
pub use source::{resource_name, DirTableSource, MemoryTableSource, TableSource};
