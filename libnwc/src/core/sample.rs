//! 16-bit PCM to 10-bit symbol mapping
//!
//! The capture hardware stores 10 significant bits per sample inside a
//! 16-bit PCM word. The forward map discards the low 6 bits; the inverse
//! map reconstructs the exact bit pattern the hardware emits for them, so
//! decoding a stream of hardware samples reproduces the original bytes.

use std::io::{self, Read, Write};

use super::types::Symbol;

/// step of the inverse map, calibrated against hardware sample data
const INVERSE_STEP: f64 = 64.0 + 1009.0 / 16384.0;

/// map a signed 16-bit PCM value to a 10-bit symbol in [0, 1023]
///
/// The shift is arithmetic, so negative samples land in [0, 511].
#[inline]
pub fn to_symbol(sample: i16) -> Symbol {
    ((sample >> 6) + 512) as Symbol
}

/// map a 10-bit symbol back to a signed 16-bit PCM value
///
/// Exact inverse of [`to_symbol`] on the 10-bit domain, low bits included.
/// Behavior outside [0, 1023] is not defended.
#[inline]
pub fn from_symbol(symbol: Symbol) -> i16 {
    let sample = (symbol as f64 - 512.0 + 0.5) * INVERSE_STEP - 0.5;
    sample.trunc() as i16
}

/// read one little-endian PCM sample and convert it
///
/// Returns `None` at end of stream; a trailing odd byte counts as the end.
pub fn read_symbol<R: Read>(input: &mut R) -> io::Result<Option<Symbol>> {
    let mut raw = [0u8; 2];
    match input.read_exact(&mut raw) {
        Ok(()) => Ok(Some(to_symbol(i16::from_le_bytes(raw)))),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// convert a symbol and write it as one little-endian PCM sample
pub fn write_symbol<W: Write>(output: &mut W, symbol: Symbol) -> io::Result<()> {
    output.write_all(&from_symbol(symbol).to_le_bytes())
}
