//! Schema side of Sieve: the read-only field catalog nodes and the
//! where-input generation registered against an external schema collector.

pub mod collect;
pub mod error;
pub mod generate;
pub mod input;
pub mod node;
pub mod validate;

/// Maximum length for model schema identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        collect::SchemaCollector,
        input::{InputDef, InputField},
        node::{Field, FieldKind, Model, Namings},
    };
    pub use sieve_core::op::OperatorRegistry;
}
