use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use goalfolio_core::goals::{GoalPlanService, GoalPlanServiceTrait};
use goalfolio_core::rankings::{RankingProviderTrait, RankingStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_plan_service: Arc<dyn GoalPlanServiceTrait + Send + Sync>,
    pub ranking_store: Arc<RankingStore>,
    pub rankings_path: Option<PathBuf>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let ranking_store = match &config.rankings_path {
        Some(path) => {
            tracing::info!("Ranking snapshot path in use: {}", path.display());
            Arc::new(RankingStore::from_path(path)?)
        }
        None => {
            tracing::warn!("GF_RANKINGS_PATH not set; tactical splits use fixed ratios");
            Arc::new(RankingStore::default())
        }
    };
    if let Some(snapshot) = ranking_store.current() {
        tracing::info!("Rankings loaded ({} assets)", snapshot.len());
    }

    let goal_plan_service: Arc<dyn GoalPlanServiceTrait + Send + Sync> =
        Arc::new(GoalPlanService::new(ranking_store.clone()));

    Ok(Arc::new(AppState {
        goal_plan_service,
        ranking_store,
        rankings_path: config.rankings_path.clone(),
    }))
}
