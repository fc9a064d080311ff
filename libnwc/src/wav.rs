//! 44-byte WAV header passthrough
//!
//! The codec treats the header as opaque bytes: read it, check that it
//! describes 16-bit mono PCM, copy it to the output verbatim. Only the
//! fields needed for validation and reporting are decoded.

use std::io::{self, Read, Write};

use crate::core::types::CodecResult;

/// size of the classic PCM WAV header
pub const WAV_HEADER_LEN: usize = 44;

/// raw WAV header with little-endian field accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    bytes: [u8; WAV_HEADER_LEN],
}

impl WavHeader {
    /// read the first 44 bytes of a stream
    pub fn read_from<R: Read>(input: &mut R) -> io::Result<WavHeader> {
        let mut bytes = [0u8; WAV_HEADER_LEN];
        input.read_exact(&mut bytes)?;
        Ok(WavHeader { bytes })
    }

    /// copy the header to the output verbatim
    pub fn write_to<W: Write>(&self, output: &mut W) -> io::Result<()> {
        output.write_all(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8; WAV_HEADER_LEN] {
        &self.bytes
    }

    /// channel count field (offset 22)
    pub fn num_channels(&self) -> u16 {
        u16::from_le_bytes([self.bytes[22], self.bytes[23]])
    }

    /// sample rate field (offset 24)
    pub fn sample_rate(&self) -> u32 {
        u32::from_le_bytes([
            self.bytes[24],
            self.bytes[25],
            self.bytes[26],
            self.bytes[27],
        ])
    }

    /// bit depth field (offset 34)
    pub fn bits_per_sample(&self) -> u16 {
        u16::from_le_bytes([self.bytes[34], self.bytes[35]])
    }

    /// reject anything but 16-bit mono
    pub fn validate(&self) -> CodecResult<()> {
        if self.num_channels() != 1 || self.bits_per_sample() != 16 {
            return Err(format!(
                "unsupported WAV format: expected 16-bit mono, got {} channel(s) at {} bits",
                self.num_channels(),
                self.bits_per_sample()
            ));
        }
        Ok(())
    }
}
