//! Protocol revision resolution and connection grouping for netid.
//!
//! Clients on different releases speak different item ID spaces. This crate
//! decides which release's table a client should be served:
//! - `ProtocolVersion` newtype and known Bedrock release numbers
//! - Declarative, ordered alias rules (`AliasRule`, `ProtocolResolver`)
//! - Grouping connections per canonical revision for batch encoding
//!
//! # Design Principles
//!
//! - **Rules are data** - Aliasing policy lives in an ordered rule list, not in code.
//! - **Total resolution** - Every revision resolves; unknown ones map to themselves.
//! - **No allocation on resolve** - Resolution is a scan over a borrowed slice.

mod error;
mod grouping;
mod resolver;
mod version;

pub use error::{ResolverError, ResolverResult};
pub use grouping::{group_by_canonical_protocol, ProtocolConnection};
pub use resolver::{AliasRule, ProtocolResolver};
pub use version::ProtocolVersion;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = ProtocolVersion::CURRENT;
        let _ = ProtocolResolver::bedrock();
        let _ = ProtocolResolver::identity();
        let _ = AliasRule::exact(ProtocolVersion::new(1), ProtocolVersion::new(2));

        // Error types
        let _: ResolverResult<()> = Ok(());
    }

    #[test]
    fn default_resolver_is_bedrock() {
        assert_eq!(ProtocolResolver::default(), ProtocolResolver::bedrock());
    }
}
