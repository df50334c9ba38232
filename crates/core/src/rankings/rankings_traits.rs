use std::sync::Arc;

use super::rankings_model::RankingSnapshot;

/// Source of the ranking snapshot used by the tactical breakdown.
///
/// Implementations must hand out a whole snapshot at a time; a computation
/// that captured one `Arc` keeps seeing it even if the provider swaps in a
/// newer one meanwhile.
pub trait RankingProviderTrait: Send + Sync {
    /// Current snapshot, or `None` when no rankings are loaded.
    fn current(&self) -> Option<Arc<RankingSnapshot>>;
}
