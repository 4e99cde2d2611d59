//! Item-bearing entity events encoded per protocol revision.

use dictionary::ItemTypeDictionary;
use protocol::{ProtocolConnection, ProtocolVersion};
use registry::DictionaryRegistry;

use crate::{ItemTranslator, LocalItem};

/// Actor event IDs used by the encoders in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActorEvent {
    /// An entity is eating or drinking; data carries the item.
    EatingItem = 57,
}

impl ActorEvent {
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// An actor event, ready for the packet layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorEventPacket {
    pub actor_runtime_id: u64,
    pub event: ActorEvent,
    pub data: i32,
}

/// An animation whose packets embed protocol-specific item IDs.
pub trait DictionaryAnimation {
    /// Encodes for clients served by `dictionary`.
    ///
    /// Returns no packets when the animation cannot be expressed for that
    /// revision (e.g. the item does not exist there).
    fn encode(
        &self,
        dictionary: &ItemTypeDictionary,
        translator: &dyn ItemTranslator,
    ) -> Vec<ActorEventPacket>;
}

/// A human consuming an item (eating particles and sound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumingItemAnimation {
    pub actor_runtime_id: u64,
    pub item: LocalItem,
}

impl ConsumingItemAnimation {
    #[must_use]
    pub const fn new(actor_runtime_id: u64, item: LocalItem) -> Self {
        Self {
            actor_runtime_id,
            item,
        }
    }
}

impl DictionaryAnimation for ConsumingItemAnimation {
    fn encode(
        &self,
        dictionary: &ItemTypeDictionary,
        translator: &dyn ItemTranslator,
    ) -> Vec<ActorEventPacket> {
        let Some(id) = translator.to_network_id(dictionary, &self.item) else {
            tracing::debug!(
                item = %self.item.identifier,
                meta = self.item.meta,
                "no runtime id for consumed item"
            );
            return Vec::new();
        };
        vec![ActorEventPacket {
            actor_runtime_id: self.actor_runtime_id,
            event: ActorEvent::EatingItem,
            data: id.packed(),
        }]
    }
}

/// Packets encoded once for every recipient sharing a canonical revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolBatch<C> {
    pub protocol: ProtocolVersion,
    pub packets: Vec<ActorEventPacket>,
    pub recipients: Vec<C>,
}

/// Encodes `animation` once per canonical revision among `recipients`.
///
/// Each group is encoded with the dictionary the registry serves for its
/// revision. Groups for which the animation yields no packets are left out.
pub fn broadcast_per_protocol<A, C, I>(
    registry: &DictionaryRegistry,
    translator: &dyn ItemTranslator,
    animation: &A,
    recipients: I,
) -> Vec<ProtocolBatch<C>>
where
    A: DictionaryAnimation + ?Sized,
    C: ProtocolConnection,
    I: IntoIterator<Item = C>,
{
    registry
        .group_connections(recipients)
        .into_iter()
        .filter_map(|(protocol, recipients)| {
            let packets = animation.encode(registry.get(protocol), translator);
            if packets.is_empty() {
                tracing::debug!(
                    %protocol,
                    recipients = recipients.len(),
                    "animation not representable; skipping group"
                );
                return None;
            }
            Some(ProtocolBatch {
                protocol,
                packets,
                recipients,
            })
        })
        .collect()
}
