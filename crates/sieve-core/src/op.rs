use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// CompareOp
///
/// Closed set of comparison operators usable in a filter expression.
/// The serde spelling doubles as the canonical suffix spelling appended to
/// field names in flat query parameters (`price_gt`, `tags_notIn`).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
    Contains,
    StartsWith,
    EndsWith,
}

impl CompareOp {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Lte,
        Self::Gt,
        Self::Gte,
        Self::In,
        Self::NotIn,
        Self::Contains,
        Self::StartsWith,
        Self::EndsWith,
    ];

    /// Canonical suffix spelling of this operator.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
        }
    }
}

///
/// OperatorRegistry
///
/// Immutable suffix-to-operator table. The registry is the single source of
/// truth for which suffix spellings the decoder accepts and for documenting
/// the legal operator set on the schema side. Passed explicitly so tests can
/// substitute reduced operator sets without shared process state.
///

#[derive(Clone, Debug)]
pub struct OperatorRegistry {
    by_suffix: BTreeMap<&'static str, CompareOp>,
}

impl OperatorRegistry {
    /// Build a registry over an explicit operator set.
    #[must_use]
    pub fn new(ops: impl IntoIterator<Item = CompareOp>) -> Self {
        let by_suffix = ops.into_iter().map(|op| (op.suffix(), op)).collect();

        Self { by_suffix }
    }

    /// Resolve a suffix spelling to its operator. Exact match, case-sensitive.
    #[must_use]
    pub fn resolve(&self, suffix: &str) -> Option<CompareOp> {
        self.by_suffix.get(suffix).copied()
    }

    /// Registered suffix spellings in lexicographic order.
    pub fn suffixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_suffix.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_suffix.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_suffix.is_empty()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new(CompareOp::ALL)
    }
}
