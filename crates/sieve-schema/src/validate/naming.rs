use crate::{MAX_FIELD_NAME_LEN, MAX_MODEL_NAME_LEN, error::SchemaError, node::Model};
use sieve_core::{filter::DELIMITER, op::OperatorRegistry};
use std::collections::BTreeSet;

/// Validate catalog naming rules for one model.
///
/// The runtime decoder always prefers the operator reading of a trailing
/// delimiter segment, so field names ending in a registered operator
/// spelling are rejected here instead of being special-cased at decode
/// time. Issues accumulate; the caller gets every finding at once.
pub fn validate_model(model: &Model, registry: &OperatorRegistry) -> Result<(), SchemaError> {
    let mut issues = Vec::new();

    if model.name.is_empty() {
        issues.push("model name is empty".to_string());
    } else if model.name.len() > MAX_MODEL_NAME_LEN {
        issues.push(format!(
            "model name exceeds {MAX_MODEL_NAME_LEN} characters"
        ));
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for field in &model.fields {
        let name = field.name.as_str();

        if name.is_empty() {
            issues.push("field name is empty".to_string());
            continue;
        }
        if name.len() > MAX_FIELD_NAME_LEN {
            issues.push(format!(
                "field '{name}' exceeds {MAX_FIELD_NAME_LEN} characters"
            ));
        }
        if !seen.insert(name) {
            issues.push(format!("duplicate field name '{name}'"));
        }

        if let Some(index) = name.rfind(DELIMITER) {
            let suffix = &name[index + 1..];
            if registry.resolve(suffix).is_some() {
                issues.push(format!(
                    "field '{name}' ends in reserved operator suffix '{DELIMITER}{suffix}'"
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::InvalidModel {
            model: model.name.clone(),
            issues,
        })
    }
}
