//! Arithmetic decoder

use std::io::{self, Read};

use crate::core::bits::BitSource;
use crate::core::types::{
    Frequency, Symbol, HALF, MAX_CODE, MAX_FREQUENCY, QUARTER, THREE_QUARTERS,
};

use super::model::Model;

/// lockstep mirror of the encoder: same 17-bit range, same renormalization
pub struct ArithmeticDecoder {
    low: u32,
    high: u32,
    value: u32,

    /// bits consumed so far, the 17 priming bits and zero-fill included
    pub bits_read: u64,
    /// symbols decoded so far, stop symbol included
    pub symbols_read: u64,
}

impl ArithmeticDecoder {
    pub fn new() -> Self {
        ArithmeticDecoder {
            low: 0,
            high: MAX_CODE,
            value: 0,
            bits_read: 0,
            symbols_read: 0,
        }
    }

    /// prime the 17-bit window from the head of the payload
    pub fn init<R: Read>(&mut self, source: &mut BitSource<R>) -> io::Result<()> {
        self.value = 0;
        for _ in 0..17 {
            self.value = (self.value << 1) | self.next_bit(source)? as u32;
        }
        Ok(())
    }

    /// decode one symbol under the model's current state
    pub fn decode<R: Read>(
        &mut self,
        model: &Model,
        source: &mut BitSource<R>,
    ) -> io::Result<Symbol> {
        self.symbols_read += 1;

        // project the code value back onto the frequency scale
        let range = (self.high - self.low + 1) as u64;
        let scaled = ((self.value - self.low + 1) as u64 * MAX_FREQUENCY as u64 - 1) / range;
        let symbol = model.frequency_symbol(scaled as Frequency);

        let (sym_low, sym_high) = model.symbol_low_high(symbol);
        self.high = self.low + (range * sym_high as u64 / MAX_FREQUENCY as u64) as u32 - 1;
        self.low += (range * sym_low as u64 / MAX_FREQUENCY as u64) as u32;

        loop {
            if self.high < HALF {
                // lower half: nothing to subtract
            } else if self.low >= HALF {
                self.value -= HALF;
                self.low -= HALF;
                self.high -= HALF;
            } else if self.low >= QUARTER && self.high < THREE_QUARTERS {
                self.value -= QUARTER;
                self.low -= QUARTER;
                self.high -= QUARTER;
            } else {
                break;
            }

            self.low = (self.low << 1) & MAX_CODE;
            self.high = ((self.high << 1) | 1) & MAX_CODE;
            self.value = (self.value << 1) | self.next_bit(source)? as u32;
        }

        debug_assert!(self.low < self.high && self.high <= MAX_CODE);

        Ok(symbol)
    }

    /// next payload bit, zero once the stream runs out
    fn next_bit<R: Read>(&mut self, source: &mut BitSource<R>) -> io::Result<u8> {
        self.bits_read += 1;
        Ok(source.get()?.unwrap_or(0))
    }
}

impl Default for ArithmeticDecoder {
    fn default() -> Self {
        Self::new()
    }
}
