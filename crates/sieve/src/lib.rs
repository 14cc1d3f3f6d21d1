//! Sieve compiles a declarative data model into filter input definitions and
//! decodes flat, suffix-encoded query parameters into predicate trees.
//!
//! ## Crate layout
//! - `core`: operator registry, filter-key decoding, where-map compilation.
//! - `schema`: catalog nodes, where-input generation, catalog validation.

pub use sieve_core as core;
pub use sieve_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// The combined surface used by schema assemblies and request handlers.
///

pub mod prelude {
    pub use sieve_core::prelude::*;
    pub use sieve_schema::prelude::*;
}
