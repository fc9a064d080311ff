pub mod bits;
pub mod sample;
pub mod types;

pub use bits::{BitSink, BitSource};
pub use sample::{from_symbol, read_symbol, to_symbol, write_symbol};
pub use types::*;
