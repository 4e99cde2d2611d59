//! Protocol revision aliasing.
//!
//! Several client releases share one item table with a nearby release. The
//! resolver maps any raw revision to the canonical revision whose table
//! should be used, driven entirely by an ordered rule list.

use std::borrow::Cow;

use crate::error::{ResolverError, ResolverResult};
use crate::ProtocolVersion;

/// A single aliasing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AliasRule {
    /// `from` always resolves to `to`.
    Exact {
        from: ProtocolVersion,
        to: ProtocolVersion,
    },

    /// Every revision in `[start, end)` resolves to `to`.
    Range {
        start: ProtocolVersion,
        end: ProtocolVersion,
        to: ProtocolVersion,
    },
}

impl AliasRule {
    /// Creates a single-revision override.
    #[must_use]
    pub const fn exact(from: ProtocolVersion, to: ProtocolVersion) -> Self {
        Self::Exact { from, to }
    }

    /// Creates a half-open range rule.
    #[must_use]
    pub const fn range(start: ProtocolVersion, end: ProtocolVersion, to: ProtocolVersion) -> Self {
        Self::Range { start, end, to }
    }

    /// Returns the target revision if this rule matches `raw`.
    #[must_use]
    pub fn apply(&self, raw: ProtocolVersion) -> Option<ProtocolVersion> {
        match *self {
            Self::Exact { from, to } => (raw == from).then_some(to),
            Self::Range { start, end, to } => (start <= raw && raw < end).then_some(to),
        }
    }

    fn validate(&self, index: usize) -> ResolverResult<()> {
        if let Self::Range { start, end, .. } = *self {
            if start >= end {
                return Err(ResolverError::EmptyRange { index, start, end });
            }
        }
        Ok(())
    }
}

const BEDROCK_ALIASES: &[AliasRule] = &[
    AliasRule::exact(ProtocolVersion::V1_19_60, ProtocolVersion::V1_19_63),
    AliasRule::range(
        ProtocolVersion::V1_19_10,
        ProtocolVersion::V1_19_40,
        ProtocolVersion::V1_19_40,
    ),
];

/// Maps raw protocol revisions to canonical table revisions.
///
/// Rules are evaluated in declared order and the first match wins; a
/// revision no rule matches resolves to itself. Only one rule is applied,
/// targets are not re-resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolResolver {
    rules: Cow<'static, [AliasRule]>,
}

impl ProtocolResolver {
    /// A resolver with no rules; every revision maps to itself.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            rules: Cow::Borrowed(&[]),
        }
    }

    /// The rule table for the Bedrock releases the server ships tables for.
    #[must_use]
    pub const fn bedrock() -> Self {
        Self {
            rules: Cow::Borrowed(BEDROCK_ALIASES),
        }
    }

    /// The default Bedrock rules as an owned list, for configuration defaults.
    #[must_use]
    pub fn bedrock_rules() -> Vec<AliasRule> {
        BEDROCK_ALIASES.to_vec()
    }

    /// Creates a resolver from an ordered rule list after validation.
    pub fn new(rules: Vec<AliasRule>) -> ResolverResult<Self> {
        for (index, rule) in rules.iter().enumerate() {
            rule.validate(index)?;
        }
        Ok(Self {
            rules: Cow::Owned(rules),
        })
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Resolves a raw revision to its canonical revision.
    #[must_use]
    pub fn resolve(&self, raw: ProtocolVersion) -> ProtocolVersion {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(raw))
            .unwrap_or(raw)
    }
}

impl Default for ProtocolResolver {
    fn default() -> Self {
        Self::bedrock()
    }
}
