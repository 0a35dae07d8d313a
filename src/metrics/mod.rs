pub use handle::Metrics;
pub use snapshot::Snapshot;
pub use snapshot::WIRE_LEN;

mod handle;
mod snapshot;

#[cfg(test)]
mod test;
