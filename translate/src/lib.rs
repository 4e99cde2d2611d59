//! Local item to wire item translation for netid.
//!
//! Encoders that reference items go through this crate to get the numeric
//! values a specific client expects:
//! - `LocalItem` / `NetworkItemId` item references
//! - `ItemTranslator` and the default `MetaTranslator`
//! - `ConsumingItemAnimation` and per-protocol batch encoding
//!
//! # Design Principles
//!
//! - **Right table, every time** - Encoding always goes through the recipient's
//!   resolved dictionary, never the newest one by default.
//! - **Misses are not failures** - An item missing from an old table is skipped.

mod animation;
mod item;
mod translator;

pub use animation::{
    broadcast_per_protocol, ActorEvent, ActorEventPacket, ConsumingItemAnimation,
    DictionaryAnimation, ProtocolBatch,
};
pub use item::{LocalItem, NetworkItemId};
pub use translator::{ItemTranslator, MetaTranslator};
