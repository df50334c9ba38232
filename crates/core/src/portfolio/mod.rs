//! Portfolio module - composition of the final allocation table.

mod portfolio_composer;
mod portfolio_model;

#[cfg(test)]
mod portfolio_tests;

pub use portfolio_composer::PortfolioComposer;
pub use portfolio_model::{PortfolioRow, PortfolioSummary};
