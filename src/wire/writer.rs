use bytes::BufMut;
use chrono::{DateTime, Timelike, Utc};

/// Producer-side counterpart of `Reader`: appends little-endian typed
/// values to an owned buffer.
#[derive(Debug, Default)]
pub struct Writer {
    vec: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.vec
    }

    pub fn write_i32(&mut self, value: i32) {
        self.vec.put_i32_le(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.vec.put_i64_le(value);
    }

    pub fn write_f32(&mut self, value: f32) {
        self.vec.put_f32_le(value);
    }

    pub fn write_f64(&mut self, value: f64) {
        self.vec.put_f64_le(value);
    }

    /// Write an instant as i64 epoch milliseconds plus the i32
    /// sub-millisecond remainder in nanoseconds.
    pub fn write_timestamp(&mut self, value: DateTime<Utc>) {
        let millis = value.timestamp_millis();
        let nanos  = value.nanosecond() % 1_000_000;

        self.write_i64(millis);
        self.write_i32(nanos as i32);
    }
}
