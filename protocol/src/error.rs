//! Resolver configuration errors.

use thiserror::Error;

use crate::ProtocolVersion;

/// Result type for resolver construction.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Errors that can occur when building a resolver from rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolverError {
    /// A range rule covers no revisions.
    #[error("alias rule {index} has an empty range [{start}, {end})")]
    EmptyRange {
        index: usize,
        start: ProtocolVersion,
        end: ProtocolVersion,
    },
}
