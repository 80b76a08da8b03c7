use crate::content::{estekhara_catalog, AyahEntry};
use crate::estekhara::history::{EstekharaHistory, HistoryRecord};
use chrono::Utc;
use rand::{Rng, RngCore};
use std::time::Duration;

/// Simulated time spent "opening the Quran" before a pick is delivered.
pub const SELECTION_DELAY: Duration = Duration::from_secs(3);

/// Where picks come from. The shipped implementation draws from the
/// bundled catalog; a backend-driven source can replace it without
/// touching the wizard.
pub trait PickSource {
    fn fetch_pick(&mut self) -> AyahEntry;

    /// Delay before the pick is delivered to the caller.
    fn latency(&self) -> Duration {
        SELECTION_DELAY
    }
}

/// Catalog-backed pick source with an injectable random source.
pub struct EstekharaEngine {
    rng: Box<dyn RngCore>,
}

impl std::fmt::Debug for EstekharaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstekharaEngine").finish_non_exhaustive()
    }
}

impl EstekharaEngine {
    pub fn new() -> Self {
        Self::with_rng(Box::new(rand::rng()))
    }

    /// Construct with a caller-supplied random source; tests pass a
    /// seeded `StdRng` for reproducible picks.
    pub fn with_rng(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }

    /// Uniform draw from the catalog.
    pub fn select_entry(&mut self) -> AyahEntry {
        let catalog = estekhara_catalog();
        let index = self.rng.random_range(0..catalog.len());
        catalog[index].clone()
    }

    /// Prepend a record for a completed run, stamped with the current
    /// wall clock. The history keeps only the newest entries.
    pub fn record_history(
        &self,
        question: &str,
        entry: &AyahEntry,
        history: &mut EstekharaHistory,
    ) {
        history.prepend(HistoryRecord::new(question, entry.clone(), Utc::now()));
    }
}

impl Default for EstekharaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PickSource for EstekharaEngine {
    fn fetch_pick(&mut self) -> AyahEntry {
        self.select_entry()
    }
}
