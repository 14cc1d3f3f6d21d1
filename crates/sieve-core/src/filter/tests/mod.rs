
use crate::{
    error::WhereError,
    filter::{compile_unique_where, compile_where, decode_key},
    op::{CompareOp, OperatorRegistry},
    value::Value,
};
use std::collections::BTreeMap;

fn params(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[test]
fn bare_key_decodes_as_equality() {
    let registry = OperatorRegistry::default();
    let decoded = decode_key("name", &registry).unwrap();

    assert_eq!(decoded.field, "name");
    assert_eq!(decoded.op, CompareOp::Eq);
}

#[test]
fn suffixed_key_splits_field_and_operator() {
    let registry = OperatorRegistry::default();

    for op in CompareOp::ALL {
        let key = format!("price_{}", op.suffix());
        let decoded = decode_key(&key, &registry).unwrap();

        assert_eq!(decoded.field, "price");
        assert_eq!(decoded.op, op);
    }
}

#[test]
fn last_delimiter_wins() {
    let registry = OperatorRegistry::default();
    let decoded = decode_key("unit_price_gt", &registry).unwrap();

    assert_eq!(decoded.field, "unit_price");
    assert_eq!(decoded.op, CompareOp::Gt);
}

#[test]
fn unknown_suffix_is_rejected() {
    let registry = OperatorRegistry::default();
    let err = decode_key("price_approx", &registry).unwrap_err();

    assert_eq!(
        err,
        WhereError::UnsupportedOperator {
            key: "price_approx".to_string(),
            operator: "approx".to_string(),
        }
    );
}

// A delimiter-bearing key never silently falls back to the field reading,
// even when the trailing segment is close to a registered spelling.
#[test]
fn near_miss_suffix_is_rejected_not_treated_as_field() {
    let registry = OperatorRegistry::default();

    assert!(decode_key("price_GT", &registry).is_err());
    assert!(decode_key("tags_notin", &registry).is_err());
}

#[test]
fn reduced_registry_rejects_unregistered_operators() {
    let registry = OperatorRegistry::new([CompareOp::Eq, CompareOp::Gt]);

    assert!(decode_key("price_gt", &registry).is_ok());
    let err = decode_key("price_lt", &registry).unwrap_err();
    assert!(matches!(
        err,
        WhereError::UnsupportedOperator { operator, .. } if operator == "lt"
    ));
}

#[test]
fn where_map_merges_operators_per_field() {
    let registry = OperatorRegistry::default();
    let tree = compile_where(
        &params(&[
            ("price_gt", Value::Int(10)),
            ("price_lt", Value::Int(100)),
        ]),
        &registry,
    )
    .unwrap();

    assert_eq!(tree.len(), 1);
    let price = tree.get("price").unwrap();
    assert_eq!(price.len(), 2);
    assert_eq!(price[&CompareOp::Gt], Value::Int(10));
    assert_eq!(price[&CompareOp::Lt], Value::Int(100));
}

#[test]
fn bare_field_compiles_to_equality() {
    let registry = OperatorRegistry::default();
    let tree = compile_where(&params(&[("name", Value::from("foo"))]), &registry).unwrap();

    let name = tree.get("name").unwrap();
    assert_eq!(name.len(), 1);
    assert_eq!(name[&CompareOp::Eq], Value::from("foo"));
}

#[test]
fn mixed_where_map_compiles_field_by_field() {
    let registry = OperatorRegistry::default();
    let tree = compile_where(
        &params(&[
            ("name", Value::from("foo")),
            ("price_gt", Value::Int(10)),
            ("tag_in", Value::List(vec![Value::from("a"), Value::from("b")])),
        ]),
        &registry,
    )
    .unwrap();

    assert_eq!(tree.len(), 3);
    assert!(tree.get("name").unwrap().contains_key(&CompareOp::Eq));
    assert!(tree.get("price").unwrap().contains_key(&CompareOp::Gt));
    assert!(tree.get("tag").unwrap().contains_key(&CompareOp::In));
}

#[test]
fn empty_where_map_compiles_to_empty_tree() {
    let registry = OperatorRegistry::default();
    let tree = compile_where(&BTreeMap::new(), &registry).unwrap();

    assert!(tree.is_empty());
}

#[test]
fn where_map_propagates_unsupported_operator() {
    let registry = OperatorRegistry::default();
    let err = compile_where(&params(&[("price_approx", Value::Int(1))]), &registry).unwrap_err();

    assert!(matches!(err, WhereError::UnsupportedOperator { .. }));
}

#[test]
fn unique_where_wraps_values_in_equality() {
    let tree = compile_unique_where(&params(&[("id", Value::Int(5))]));

    let id = tree.get("id").unwrap();
    assert_eq!(id.len(), 1);
    assert_eq!(id[&CompareOp::Eq], Value::Int(5));
}

#[test]
fn unique_where_keys_bypass_suffix_decoding() {
    // "price_gt" here is an opaque field identifier, not an encoded operator.
    let tree = compile_unique_where(&params(&[("price_gt", Value::Int(1))]));

    assert!(tree.get("price").is_none());
    let field = tree.get("price_gt").unwrap();
    assert_eq!(field[&CompareOp::Eq], Value::Int(1));
}
