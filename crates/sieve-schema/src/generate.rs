use crate::{collect::SchemaCollector, error::SchemaError, input::InputDef, node::Model};
use sieve_core::op::OperatorRegistry;

/// Fixed name suffix for the general where-input of a model.
pub const WHERE_INPUT_SUFFIX: &str = "WhereInput";

/// Fixed name suffix for the unique where-input of a model.
pub const WHERE_UNIQUE_INPUT_SUFFIX: &str = "WhereUniqueInput";

/// Registered name of a model's general where-input.
#[must_use]
pub fn where_input_name(model: &Model) -> String {
    format!("{}{WHERE_INPUT_SUFFIX}", model.namings().capital_singular)
}

/// Registered name of a model's unique where-input.
#[must_use]
pub fn where_unique_input_name(model: &Model) -> String {
    format!(
        "{}{WHERE_UNIQUE_INPUT_SUFFIX}",
        model.namings().capital_singular
    )
}

/// Build the general where-input: one optional equality clause per
/// filter-eligible field, in catalog order.
///
/// Non-filterable kinds (relations, nested objects) are skipped silently.
/// The input surface itself models bare equality; operator-suffixed
/// filtering is a runtime concept layered on the same field names, so the
/// registry's legal suffix set is documented on the rendered block.
#[must_use]
pub fn where_input(model: &Model, registry: &OperatorRegistry) -> InputDef {
    let mut def = InputDef::new(where_input_name(model));

    let suffixes: Vec<String> = registry.suffixes().map(|s| format!("_{s}")).collect();
    def.comment = Some(format!(
        "filter keys may append one of: {}",
        suffixes.join(", ")
    ));

    for field in &model.fields {
        if field.is_filterable() {
            def.push(&field.name, field.type_name());
        }
    }

    def
}

/// Build the unique where-input from the fields marked unique, in catalog
/// order.
///
/// A model whose unique subset is empty fails with `NoUniqueField`; a unique
/// filter with zero identifying fields cannot support single-record lookups.
pub fn where_unique_input(model: &Model) -> Result<InputDef, SchemaError> {
    let mut def = InputDef::new(where_unique_input_name(model));

    for field in model.unique_fields() {
        def.push(&field.name, field.type_name());
    }

    if def.fields.is_empty() {
        return Err(SchemaError::NoUniqueField {
            model: model.name.clone(),
        });
    }

    Ok(def)
}

/// Generate both where-inputs for a model and register them with the
/// collector.
///
/// Fails before registering anything when the model has no unique field.
pub fn visit_model(
    model: &Model,
    registry: &OperatorRegistry,
    collector: &mut dyn SchemaCollector,
) -> Result<(), SchemaError> {
    let where_def = where_input(model, registry);
    let unique_def = where_unique_input(model)?;

    collector.add_input(&where_def.name, &where_def.render());
    collector.add_input(&unique_def.name, &unique_def.render());

    Ok(())
}
