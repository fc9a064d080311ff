//! nwc - lossless zero-delay codec for 10-bit neural waveforms carried as
//! 16-bit mono PCM in WAV containers
//!
//! An adaptive predictive model supplies per-symbol conditional frequency
//! tables and a fixed-precision binary arithmetic coder turns them into
//! bits. Encoder and decoder replay the exact same model updates, so the
//! stream carries no side information beyond the 44-byte WAV header it
//! passes through verbatim.
//!
//! # Example
//! ```
//! use libnwc_codec::{compress, decompress, from_symbol};
//!
//! // minimal 16-bit mono WAV: 44-byte header, then little-endian samples
//! let mut wav = vec![0u8; 44];
//! wav[22] = 1; // one channel
//! wav[34] = 16; // 16 bits per sample
//! for symbol in [500u16, 512, 520, 700] {
//!     wav.extend_from_slice(&from_symbol(symbol).to_le_bytes());
//! }
//!
//! let packed = compress(&wav).unwrap();
//! assert_eq!(decompress(&packed).unwrap(), wav);
//! ```

pub mod coding;
pub mod core;
pub mod stream;
pub mod wav;

pub use crate::coding::{ArithmeticDecoder, ArithmeticEncoder, Model};
pub use crate::core::bits::{BitSink, BitSource};
pub use crate::core::sample::{from_symbol, to_symbol};
pub use crate::core::types::{
    CodecResult, Frequency, Symbol, MAX_CODE, MAX_FREQUENCY, NUM_SYMBOLS, STOP_SYMBOL,
};
pub use crate::stream::{decode_stream, encode_stream, DecodeStats, EncodeStats};
pub use crate::wav::{WavHeader, WAV_HEADER_LEN};

/// compress a complete WAV byte buffer
pub fn compress(input: &[u8]) -> CodecResult<Vec<u8>> {
    let mut reader = input;
    let mut output = Vec::new();
    encode_stream(&mut reader, &mut output)?;
    Ok(output)
}

/// decompress a complete compressed buffer back to WAV bytes
pub fn decompress(input: &[u8]) -> CodecResult<Vec<u8>> {
    let mut reader = input;
    let mut output = Vec::new();
    decode_stream(&mut reader, &mut output)?;
    Ok(output)
}
