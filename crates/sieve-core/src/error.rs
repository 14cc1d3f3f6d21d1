use thiserror::Error as ThisError;

///
/// WhereError
///
/// Failures raised while decoding flat where-maps. Fatal to the operation
/// that raised them; the caller decides whether to reject the request or
/// surface a field-level validation message.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum WhereError {
    /// A key's trailing suffix did not match any registered operator.
    #[error("unsupported operator '{operator}' in filter key '{key}'")]
    UnsupportedOperator { key: String, operator: String },
}
