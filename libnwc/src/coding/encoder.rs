//! Arithmetic encoder

use std::io::{self, Write};

use crate::core::bits::BitSink;
use crate::core::types::{Symbol, HALF, MAX_CODE, MAX_FREQUENCY, QUARTER, THREE_QUARTERS};

use super::model::Model;

/// fixed-precision binary arithmetic encoder with a 17-bit range
pub struct ArithmeticEncoder {
    low: u32,
    high: u32,
    pending_bits: u32,

    /// bits emitted so far, pending bits included
    pub bits_written: u64,
    /// symbols encoded so far, stop symbol included
    pub symbols_written: u64,
}

impl ArithmeticEncoder {
    pub fn new() -> Self {
        ArithmeticEncoder {
            low: 0,
            high: MAX_CODE,
            pending_bits: 0,
            bits_written: 0,
            symbols_written: 0,
        }
    }

    /// encode one symbol under the model's current state
    pub fn encode<W: Write>(
        &mut self,
        symbol: Symbol,
        model: &Model,
        sink: &mut BitSink<W>,
    ) -> io::Result<()> {
        self.symbols_written += 1;

        let (sym_low, sym_high) = model.symbol_low_high(symbol);

        // narrow the range; 64-bit products, floor division by 0x7FFF
        let range = (self.high - self.low + 1) as u64;
        self.high = self.low + (range * sym_high as u64 / MAX_FREQUENCY as u64) as u32 - 1;
        self.low += (range * sym_low as u64 / MAX_FREQUENCY as u64) as u32;

        loop {
            if self.high < HALF {
                // range settled in the lower half
                self.write_bits(0, sink)?;
            } else if self.low >= HALF {
                // range settled in the upper half
                self.write_bits(1, sink)?;
            } else if self.low >= QUARTER && self.high < THREE_QUARTERS {
                // range straddles the midpoint: defer the bit
                self.pending_bits += 1;
                self.low -= QUARTER;
                self.high -= QUARTER;
            } else {
                break;
            }

            self.low = (self.low << 1) & MAX_CODE;
            self.high = ((self.high << 1) | 1) & MAX_CODE;
        }

        debug_assert!(self.low < self.high && self.high <= MAX_CODE);

        Ok(())
    }

    /// settle the final interval so the decoder can resolve the last symbol
    ///
    /// The sink still holds a partial octet afterwards; flushing it is the
    /// caller's job.
    pub fn flush<W: Write>(&mut self, sink: &mut BitSink<W>) -> io::Result<()> {
        self.pending_bits += 1;
        if self.low < QUARTER {
            self.write_bits(0, sink)
        } else {
            self.write_bits(1, sink)
        }
    }

    /// one resolved bit followed by the deferred complement bits
    fn write_bits<W: Write>(&mut self, bit: u8, sink: &mut BitSink<W>) -> io::Result<()> {
        self.bits_written += 1 + self.pending_bits as u64;
        sink.put(bit)?;
        for _ in 0..self.pending_bits {
            sink.put(bit ^ 1)?;
        }
        self.pending_bits = 0;
        Ok(())
    }
}

impl Default for ArithmeticEncoder {
    fn default() -> Self {
        Self::new()
    }
}
