use std::sync::Arc;
use crate::wire::{Error, Reader};
use super::Snapshot;

/// Shared handle to a decoded snapshot.
///
/// Cloning is a reference-count bump, so an owning cluster object can
/// hand out copies without duplicating the record. The snapshot is never
/// mutated after decode and is safe to read from any thread.
#[derive(Clone, Debug)]
pub struct Metrics {
    snapshot: Arc<Snapshot>,
}

impl Metrics {
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let snapshot = Snapshot::decode(reader)?;
        Ok(Self::from(snapshot))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Snapshot> for Metrics {
    fn from(snapshot: Snapshot) -> Self {
        let snapshot = Arc::new(snapshot);
        Self { snapshot }
    }
}
