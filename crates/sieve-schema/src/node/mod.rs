mod field;
mod model;

pub use field::{Field, FieldKind};
pub use model::{Model, Namings};
