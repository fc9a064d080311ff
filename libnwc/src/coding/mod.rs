//! Predictive model and arithmetic coder
//!
//! The model supplies conditional cumulative frequency ranges; the coder
//! turns them into bits. The two are coupled by a strict protocol: every
//! coded symbol is followed by one `update_state` call, at the same point
//! of the control sequence on the encoding and the decoding side. Any
//! deviation desynchronizes the stream.

pub mod decoder;
pub mod encoder;
pub mod model;

#[cfg(test)]
mod tests;

pub use decoder::ArithmeticDecoder;
pub use encoder::ArithmeticEncoder;
pub use model::Model;
