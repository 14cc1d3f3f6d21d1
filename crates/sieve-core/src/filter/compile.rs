use crate::{
    error::WhereError,
    filter::decode::decode_key,
    op::{CompareOp, OperatorRegistry},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// WhereTree
///
/// Decoded filter expression: field name to operator to comparison value.
/// Backed by ordered maps so iteration order is deterministic.
///
/// Mutation is explicit through `insert`; `WhereTree` does not expose
/// `DerefMut` to keep the merge semantics in one place.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq, Serialize)]
pub struct WhereTree(BTreeMap<String, BTreeMap<CompareOp, Value>>);

impl WhereTree {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert one (field, operator, value) entry.
    ///
    /// Operators accumulate per field; re-inserting the same (field,
    /// operator) pair replaces the value, which cannot occur when the input
    /// is a flat string map.
    pub fn insert(&mut self, field: impl Into<String>, op: CompareOp, value: Value) {
        self.0.entry(field.into()).or_default().insert(op, value);
    }

    /// Operator map for a single field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&BTreeMap<CompareOp, Value>> {
        self.0.get(field)
    }
}

/// Compile a flat, suffix-encoded where-map into a predicate tree.
///
/// `{price_gt: 10, price_lt: 100, name: "x"}` becomes
/// `{price: {Gt: 10, Lt: 100}, name: {Eq: "x"}}`: operators targeting the
/// same field merge into one inner map instead of overwriting each other.
/// Empty input yields an empty tree; an unresolvable suffix aborts the whole
/// compilation.
pub fn compile_where(
    params: &BTreeMap<String, Value>,
    registry: &OperatorRegistry,
) -> Result<WhereTree, WhereError> {
    let mut tree = WhereTree::new();

    for (key, value) in params {
        let decoded = decode_key(key, registry)?;
        tree.insert(decoded.field, decoded.op, value.clone());
    }

    Ok(tree)
}

/// Compile a unique where-map, where every key targets the unique-equality
/// case.
///
/// Keys are taken verbatim as field names and never run through the suffix
/// decoder, so field names that merely look operator-suffixed pass through
/// unchanged. This path cannot fail.
#[must_use]
pub fn compile_unique_where(params: &BTreeMap<String, Value>) -> WhereTree {
    let mut tree = WhereTree::new();

    for (key, value) in params {
        tree.insert(key.as_str(), CompareOp::Eq, value.clone());
    }

    tree
}
