//! Core runtime for Sieve: the operator registry, filter-key decoding, and
//! compilation of flat where-maps into predicate trees.
//!
//! Nothing in this crate executes queries or touches storage; the output
//! `WhereTree` is handed to an external query executor.

pub mod error;
pub mod filter;
pub mod op;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        filter::WhereTree,
        op::{CompareOp, OperatorRegistry},
        value::Value,
    };
}
