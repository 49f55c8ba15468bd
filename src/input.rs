use std::ops::Range;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

/// A forward-only reader over a byte buffer. The position only ever advances,
/// and every read is bounds-checked before any bytes are handed out, so a
/// truncated input fails cleanly rather than surfacing a partial value.
pub struct ByteCursor<'a> {
    data: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data }
    }

    fn consume(&mut self, r: Range<usize>) -> Result<&'a [u8]> {
        if r.end <= self.data.len() {
            let ret = &self.data[r.start..r.end];
            self.data = &self.data[r.end..];
            Ok(ret)
        } else {
            Err(Error::UnexpectedEof)
        }
    }

    /// Consume exactly `n` bytes. Every other read goes through here.
    pub fn read_n(&mut self, n: usize) -> Result<&'a [u8]> {
        self.consume(0..n)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.consume(0..1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.consume(0..1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let mut bs = self.consume(0..std::mem::size_of::<u16>())?;
        bs.read_u16::<BigEndian>().map_err(|_| Error::UnexpectedEof)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(0..std::mem::size_of::<i16>())?;
        bs.read_i16::<BigEndian>().map_err(|_| Error::UnexpectedEof)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(0..std::mem::size_of::<i32>())?;
        bs.read_i32::<BigEndian>().map_err(|_| Error::UnexpectedEof)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(0..std::mem::size_of::<i64>())?;
        bs.read_i64::<BigEndian>().map_err(|_| Error::UnexpectedEof)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume(0..std::mem::size_of::<f32>())?;
        bs.read_f32::<BigEndian>().map_err(|_| Error::UnexpectedEof)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume(0..std::mem::size_of::<f64>())?;
        bs.read_f64::<BigEndian>().map_err(|_| Error::UnexpectedEof)
    }

    /// Read a length-prefixed NBT string: a u16 big-endian byte count
    /// followed by that many bytes of UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bs = self.consume(0..len)?;
        let s = std::str::from_utf8(bs).map_err(|_| Error::NonunicodeString)?;
        Ok(s.to_owned())
    }
}
