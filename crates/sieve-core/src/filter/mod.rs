mod compile;
mod decode;

#[cfg(test)]
mod tests;

pub use compile::{WhereTree, compile_unique_where, compile_where};
pub use decode::{DELIMITER, DecodedKey, decode_key};
