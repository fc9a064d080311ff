//! common types and constants for the nwc codec

// symbols

/// 10-bit symbol (or the stop symbol) held in the low bits of a u16
pub type Symbol = u16;

/// cumulative frequency value from the model tables
pub type Frequency = u16;

/// 1024 symbols for the 10-bit signal plus one extra stop symbol
pub const NUM_SYMBOLS: usize = 1025;

/// symbol id that terminates a stream
pub const STOP_SYMBOL: Symbol = 1024;

// coder scale

/// top of the cumulative frequency scale (2^15 - 1)
pub const MAX_FREQUENCY: Frequency = 0x7FFF;

/// largest 17-bit coder state value (2^17 - 1)
pub const MAX_CODE: u32 = 0x1_FFFF;

/// quarter point of the coder range (2^15)
pub const QUARTER: u32 = 0x0_8000;

/// midpoint of the coder range (2^16)
pub const HALF: u32 = 0x1_0000;

/// three-quarter point of the coder range
pub const THREE_QUARTERS: u32 = 0x1_8000;

/// result type for codec operations
pub type CodecResult<T> = Result<T, String>;
