//! Shared, swappable holder for the active ranking snapshot.

use std::path::Path;
use std::sync::{Arc, RwLock};

use log::info;

use crate::errors::Result;

use super::rankings_loader::load_ranking_snapshot;
use super::rankings_model::RankingSnapshot;
use super::rankings_traits::RankingProviderTrait;

/// Ranking provider whose snapshot can be replaced at runtime.
///
/// The lock only guards the pointer; snapshots themselves are immutable.
#[derive(Debug, Default)]
pub struct RankingStore {
    snapshot: RwLock<Option<Arc<RankingSnapshot>>>,
}

impl RankingStore {
    pub fn new(snapshot: Option<RankingSnapshot>) -> Self {
        Self {
            snapshot: RwLock::new(snapshot.map(Arc::new)),
        }
    }

    /// Builds a store holding whatever `path` yields.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(load_ranking_snapshot(path)?))
    }

    /// Installs `snapshot` and returns the one it replaced.
    pub fn replace(&self, snapshot: Option<RankingSnapshot>) -> Option<Arc<RankingSnapshot>> {
        let next = snapshot.map(Arc::new);
        let rows = next.as_ref().map(|s| s.len()).unwrap_or(0);
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *guard, next);
        info!("Ranking snapshot replaced ({} assets)", rows);
        previous
    }

    /// Reloads from `path` and swaps the result in.
    ///
    /// On error the current snapshot stays in place.
    pub fn reload_from(&self, path: &Path) -> Result<Option<Arc<RankingSnapshot>>> {
        let loaded = load_ranking_snapshot(path)?;
        self.replace(loaded);
        Ok(self.current())
    }
}

impl RankingProviderTrait for RankingStore {
    fn current(&self) -> Option<Arc<RankingSnapshot>> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
