//! Protocol revision numbers.

use std::fmt;

/// A client wire-protocol revision.
///
/// Revisions are the raw numbers a client announces at login. They are only
/// meaningful relative to each other: a higher revision is a newer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProtocolVersion(u32);

impl ProtocolVersion {
    /// Bedrock 1.18.10.
    pub const V1_18_10: Self = Self(486);
    /// Bedrock 1.18.30.
    pub const V1_18_30: Self = Self(503);
    /// Bedrock 1.19.0.
    pub const V1_19_0: Self = Self(527);
    /// Bedrock 1.19.10.
    pub const V1_19_10: Self = Self(534);
    /// Bedrock 1.19.20.
    pub const V1_19_20: Self = Self(544);
    /// Bedrock 1.19.21.
    pub const V1_19_21: Self = Self(545);
    /// Bedrock 1.19.30.
    pub const V1_19_30: Self = Self(554);
    /// Bedrock 1.19.40.
    pub const V1_19_40: Self = Self(557);
    /// Bedrock 1.19.50.
    pub const V1_19_50: Self = Self(560);
    /// Bedrock 1.19.60.
    pub const V1_19_60: Self = Self(567);
    /// Bedrock 1.19.63.
    pub const V1_19_63: Self = Self(568);
    /// Bedrock 1.19.70.
    pub const V1_19_70: Self = Self(575);
    /// Bedrock 1.19.80.
    pub const V1_19_80: Self = Self(582);
    /// Bedrock 1.20.0.
    pub const V1_20_0: Self = Self(589);
    /// Bedrock 1.20.10.
    pub const V1_20_10: Self = Self(594);

    /// The newest revision the server ships tables for.
    pub const CURRENT: Self = Self::V1_20_10;

    /// Creates a protocol version from its raw number.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw protocol number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProtocolVersion {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ProtocolVersion> for u32 {
    fn from(version: ProtocolVersion) -> Self {
        version.0
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
