use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Truncated { wanted: usize, remaining: usize },
    Timestamp { millis: i64, nanos: i32 },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Truncated { wanted, remaining } => {
                write!(f, "truncated record: wanted {} bytes, {} remaining", wanted, remaining)
            }
            Error::Timestamp { millis, nanos } => {
                write!(f, "unrepresentable timestamp: {}ms + {}ns", millis, nanos)
            }
        }
    }
}
