//! Batching connections by canonical protocol revision.

use std::collections::BTreeMap;

use crate::{ProtocolResolver, ProtocolVersion};

/// Anything that knows the raw protocol revision its client speaks.
pub trait ProtocolConnection {
    /// The raw revision the client announced.
    fn protocol_version(&self) -> ProtocolVersion;
}

impl<T: ProtocolConnection + ?Sized> ProtocolConnection for &T {
    fn protocol_version(&self) -> ProtocolVersion {
        (**self).protocol_version()
    }
}

/// Partitions connections by the canonical revision their protocol resolves to.
///
/// Each group keeps the order in which its connections were presented, so a
/// packet encoded once per group can be sent in the same order a per-client
/// loop would have used.
pub fn group_by_canonical_protocol<C, I>(
    resolver: &ProtocolResolver,
    connections: I,
) -> BTreeMap<ProtocolVersion, Vec<C>>
where
    C: ProtocolConnection,
    I: IntoIterator<Item = C>,
{
    let mut groups: BTreeMap<ProtocolVersion, Vec<C>> = BTreeMap::new();
    for connection in connections {
        let canonical = resolver.resolve(connection.protocol_version());
        groups.entry(canonical).or_default().push(connection);
    }
    groups
}
