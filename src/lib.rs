pub use metrics::Metrics;
pub use metrics::Snapshot;
pub use metrics::WIRE_LEN;

pub use wire::Error;
pub use wire::Reader;
pub use wire::Writer;

pub mod metrics;
pub mod wire;
