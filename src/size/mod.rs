//! Payload size ranges: parse a byte-size range expression and generate
//! a payload within it.

pub mod payload;
pub mod types;

pub use payload::{fill_letters, letter_stream, ALPHABET, CHUNK_SIZE};
pub use types::{ByteUnit, SizeRange};
