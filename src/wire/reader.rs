use bytes::Buf;
use chrono::{DateTime, LocalResult, TimeZone, Utc};
use super::Error;

/// Sequential little-endian reader over a borrowed byte buffer.
///
/// Each typed read advances the cursor by the type's fixed width and
/// fails with `Error::Truncated` when fewer bytes remain. A failed read
/// leaves the cursor position unspecified.
pub struct Reader<'a> {
    buf: &'a [u8],
    len: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, len: buf.len() }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.len - self.buf.len()
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        self.need(4)?;
        Ok(self.buf.get_i32_le())
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        self.need(8)?;
        Ok(self.buf.get_i64_le())
    }

    pub fn read_f32(&mut self) -> Result<f32, Error> {
        self.need(4)?;
        Ok(self.buf.get_f32_le())
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        self.need(8)?;
        Ok(self.buf.get_f64_le())
    }

    /// Read an instant encoded as i64 epoch milliseconds followed by an
    /// i32 sub-millisecond remainder in nanoseconds (0..1_000_000).
    pub fn read_timestamp(&mut self) -> Result<DateTime<Utc>, Error> {
        let millis = self.read_i64()?;
        let nanos  = self.read_i32()?;

        let invalid = || Error::Timestamp { millis, nanos };

        if !(0..1_000_000).contains(&nanos) {
            return Err(invalid());
        }

        let secs = millis.div_euclid(1000);
        let frac = millis.rem_euclid(1000) as u32 * 1_000_000 + nanos as u32;

        match Utc.timestamp_opt(secs, frac) {
            LocalResult::Single(time) => Ok(time),
            _                         => Err(invalid()),
        }
    }

    fn need(&self, wanted: usize) -> Result<(), Error> {
        let remaining = self.buf.len();
        match remaining >= wanted {
            true  => Ok(()),
            false => Err(Error::Truncated { wanted, remaining }),
        }
    }
}
