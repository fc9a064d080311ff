//! Byte-aligned MSB-first bit I/O over arbitrary byte streams

use std::io::{self, Read, Write};

/// bit-level writer
pub struct BitSink<W: Write> {
    writer: W,
    buffer: u8,
    filled: u8,
}

impl<W: Write> BitSink<W> {
    pub fn new(writer: W) -> Self {
        BitSink {
            writer,
            buffer: 0,
            filled: 0,
        }
    }

    /// queue one bit MSB-first; emits an octet once 8 bits accumulate
    pub fn put(&mut self, bit: u8) -> io::Result<()> {
        self.buffer = (self.buffer << 1) | (bit & 1);
        self.filled += 1;
        if self.filled == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.filled = 0;
        }
        Ok(())
    }

    /// emit any partial octet left-aligned, then flush the underlying writer
    ///
    /// A no-op on the bit buffer when it is empty, so repeated calls are safe.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.filled > 0 {
            self.writer.write_all(&[self.buffer << (8 - self.filled)])?;
            self.buffer = 0;
            self.filled = 0;
        }
        self.writer.flush()
    }
}

/// bit-level reader
pub struct BitSource<R: Read> {
    reader: R,
    buffer: u8,
    pos: u8,
}

impl<R: Read> BitSource<R> {
    pub fn new(reader: R) -> Self {
        BitSource {
            reader,
            buffer: 0,
            pos: 8,
        }
    }

    /// next bit MSB-first, or `None` once the stream is exhausted
    pub fn get(&mut self) -> io::Result<Option<u8>> {
        if self.pos == 8 {
            let mut byte = [0u8; 1];
            match self.reader.read_exact(&mut byte) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            }
            self.buffer = byte[0];
            self.pos = 0;
        }

        let bit = (self.buffer >> (7 - self.pos)) & 1;
        self.pos += 1;
        Ok(Some(bit))
    }
}
