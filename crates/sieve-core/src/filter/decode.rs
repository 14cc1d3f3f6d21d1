use crate::{
    error::WhereError,
    op::{CompareOp, OperatorRegistry},
};

/// Delimiter separating a field name from an operator suffix in a flat key.
pub const DELIMITER: char = '_';

///
/// DecodedKey
///
/// Result of splitting a flat filter key into field name and operator.
/// Borrows the field slice from the input key.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodedKey<'a> {
    pub field: &'a str,
    pub op: CompareOp,
}

/// Split a flat filter key into field name and operator.
///
/// The grammar is last-delimiter-wins: `price_gt` decodes as (`price`, `Gt`)
/// and a key without the delimiter is an equality filter on the whole key.
/// A trailing segment that does not spell a registered operator is an error,
/// never a silent fall-back to the field-name interpretation.
///
/// A field name that itself contains the delimiter and happens to end in a
/// registered spelling is therefore always read as an operator. The catalog
/// rejects such names at validation time instead of special-casing them here.
pub fn decode_key<'a>(
    key: &'a str,
    registry: &OperatorRegistry,
) -> Result<DecodedKey<'a>, WhereError> {
    let Some(index) = key.rfind(DELIMITER) else {
        return Ok(DecodedKey {
            field: key,
            op: CompareOp::Eq,
        });
    };

    let suffix = &key[index + 1..];
    match registry.resolve(suffix) {
        Some(op) => Ok(DecodedKey {
            field: &key[..index],
            op,
        }),
        None => Err(WhereError::UnsupportedOperator {
            key: key.to_string(),
            operator: suffix.to_string(),
        }),
    }
}
