//! Stream drivers: the encode and decode main loops
//!
//! Both loops follow the same discipline: pass the WAV header through,
//! then code one symbol at a time, updating the model right after each
//! symbol. The stop symbol terminates the payload; the decoder never
//! consumes a bit past it.

use std::io::{self, Read, Write};

use crate::coding::{ArithmeticDecoder, ArithmeticEncoder, Model};
use crate::core::bits::{BitSink, BitSource};
use crate::core::sample::{read_symbol, write_symbol};
use crate::core::types::{CodecResult, STOP_SYMBOL};
use crate::wav::WavHeader;

/// counters reported by a finished encode run
#[derive(Debug, Clone, Copy)]
pub struct EncodeStats {
    /// data samples consumed from the input payload
    pub samples: u64,
    /// payload bits produced, before byte padding
    pub payload_bits: u64,
}

impl EncodeStats {
    /// payload size in whole octets
    pub fn compressed_bytes(&self) -> u64 {
        self.payload_bits.div_ceil(8)
    }
}

/// counters reported by a finished decode run
#[derive(Debug, Clone, Copy)]
pub struct DecodeStats {
    /// data samples written to the output payload
    pub samples: u64,
    /// payload bits consumed, zero-fill past the end included
    pub payload_bits: u64,
}

/// compress a 16-bit mono WAV stream
///
/// Reads to end of input; a trailing odd byte is dropped. The output is
/// the verbatim 44-byte header followed by the packed payload, stop
/// symbol and byte padding included.
pub fn encode_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CodecResult<EncodeStats> {
    let header =
        WavHeader::read_from(input).map_err(|e| format!("failed to read WAV header: {e}"))?;
    header.validate()?;
    header
        .write_to(output)
        .map_err(|e| format!("failed to write WAV header: {e}"))?;

    let write_err = |e: io::Error| format!("failed to write payload: {e}");

    let mut model = Model::new();
    let mut encoder = ArithmeticEncoder::new();
    let mut sink = BitSink::new(output);
    let mut samples: u64 = 0;

    while let Some(symbol) =
        read_symbol(input).map_err(|e| format!("failed to read samples: {e}"))?
    {
        encoder.encode(symbol, &model, &mut sink).map_err(write_err)?;
        model.update_state(symbol);
        samples += 1;
    }

    encoder
        .encode(STOP_SYMBOL, &model, &mut sink)
        .map_err(write_err)?;
    model.update_state(STOP_SYMBOL);

    // settle the coder, then pad the sink to a byte boundary
    encoder.flush(&mut sink).map_err(write_err)?;
    sink.flush().map_err(write_err)?;

    Ok(EncodeStats {
        samples,
        payload_bits: encoder.bits_written,
    })
}

/// decompress a stream produced by [`encode_stream`]
///
/// Stops at the stop symbol. A truncated payload is not detected: missing
/// bits read as zeros, so corruption shows up as garbage samples, not as
/// an error.
pub fn decode_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CodecResult<DecodeStats> {
    let header =
        WavHeader::read_from(input).map_err(|e| format!("failed to read WAV header: {e}"))?;
    header.validate()?;
    header
        .write_to(output)
        .map_err(|e| format!("failed to write WAV header: {e}"))?;

    let read_err = |e: io::Error| format!("failed to read payload: {e}");

    let mut model = Model::new();
    let mut decoder = ArithmeticDecoder::new();
    let mut source = BitSource::new(input);
    decoder.init(&mut source).map_err(read_err)?;

    let mut samples: u64 = 0;
    loop {
        let symbol = decoder.decode(&model, &mut source).map_err(read_err)?;
        model.update_state(symbol);

        if symbol == STOP_SYMBOL {
            break;
        }

        write_symbol(output, symbol).map_err(|e| format!("failed to write samples: {e}"))?;
        samples += 1;
    }

    output
        .flush()
        .map_err(|e| format!("failed to write samples: {e}"))?;

    Ok(DecodeStats {
        samples,
        payload_bits: decoder.bits_read,
    })
}
