//! Snapshot handle for datasets that may be reloaded while queries run.
use std::sync::{Arc, PoisonError, RwLock};

use super::InMemoryDataset;

/// Holds the current dataset snapshot.
///
/// Readers clone the inner `Arc` and keep using that snapshot for the whole
/// query; [`SharedDataset::replace`] swaps in a new one atomically, so a
/// query never sees half of an old dataset and half of a new one.
#[derive(Debug, Default)]
pub struct SharedDataset {
    current: RwLock<Arc<InMemoryDataset>>,
}

impl SharedDataset {
    #[must_use]
    pub fn new(dataset: InMemoryDataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    /// The snapshot in effect right now.
    #[must_use]
    pub fn snapshot(&self) -> Arc<InMemoryDataset> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install a new snapshot and return the one it replaced.
    pub fn replace(&self, dataset: InMemoryDataset) -> Arc<InMemoryDataset> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    const ONE: &str = r#"{"airports": [
        {"id": 1, "iata": "AAA", "icao": "XAAA", "lat": 0.0, "lng": 0.0, "rwy": 1}
    ]}"#;
    const TWO: &str = r#"{"airports": [
        {"id": 1, "iata": "AAA", "icao": "XAAA", "lat": 0.0, "lng": 0.0, "rwy": 1},
        {"id": 2, "iata": "BBB", "icao": "XBBB", "lat": 0.0, "lng": 1.0, "rwy": 1}
    ]}"#;

    #[test]
    fn readers_keep_their_snapshot_across_reload() {
        let shared = SharedDataset::new(InMemoryDataset::from_json(ONE).unwrap());
        let before = shared.snapshot();
        let old = shared.replace(InMemoryDataset::from_json(TWO).unwrap());
        assert_eq!(before.airports().len(), 1);
        assert_eq!(old.airports().len(), 1);
        assert_eq!(shared.snapshot().airports().len(), 2);
    }

    #[test]
    fn snapshots_are_shared_across_threads() {
        let shared = Arc::new(SharedDataset::new(InMemoryDataset::from_json(TWO).unwrap()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || shared.snapshot().find_airport("bbb").map(|ap| ap.id))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(2));
        }
    }
}
