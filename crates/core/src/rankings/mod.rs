//! Rankings module - snapshot models, loader and providers.

mod rankings_loader;
mod rankings_model;
mod rankings_store;
mod rankings_traits;


pub use rankings_loader::{load_ranking_snapshot, parse_rankings, RankingFormat};
pub use rankings_model::{AssetRanking, RankingSnapshot};
pub use rankings_store::RankingStore;
pub use rankings_traits::RankingProviderTrait;
