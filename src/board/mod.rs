pub mod combiner;
pub mod fragments;
pub mod groups;

pub use combiner::*;
pub use fragments::*;
pub use groups::*;

use std::sync::Arc;

use crate::error::BoardError;

/// Fragment store plus a cached copy of the combined document.
///
/// The cache is tagged with the store revision it was built from and is
/// rebuilt whenever the store has moved past it.
#[derive(Debug)]
pub struct Board {
    store: FragmentStore,
    combined: Option<(u64, String)>,
}

impl Board {
    pub fn new(registry: Arc<GroupRegistry>) -> Self {
        Self {
            store: FragmentStore::new(registry),
            combined: None,
        }
    }

    pub fn set_fragment(&mut self, group: &str, text: String) -> Result<GroupId, BoardError> {
        self.store.set(group, text)
    }

    pub fn snapshot(&self) -> GroupTexts {
        self.store.snapshot()
    }

    /// The combined document, recomputed if the store changed since last time.
    pub fn combined_text(&mut self) -> &str {
        let revision = self.store.revision();
        let stale = !matches!(&self.combined, Some((built_at, _)) if *built_at == revision);
        if stale {
            self.combined = Some((revision, combine(&self.store.snapshot())));
        }
        match &self.combined {
            Some((_, text)) => text,
            None => "",
        }
    }
}
