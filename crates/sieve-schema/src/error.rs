use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Schema-build-time failures. Both variants indicate a data-model defect
/// and are not recoverable by retrying with the same input.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    /// A unique where-input needs at least one field marked unique.
    #[error("no unique field found in model '{model}'")]
    NoUniqueField { model: String },

    /// Catalog validation found one or more naming violations.
    #[error("invalid model '{model}': {}", .issues.join("; "))]
    InvalidModel { model: String, issues: Vec<String> },
}
