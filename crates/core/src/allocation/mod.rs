//! Allocation module - strategic grid and tactical breakdown.

mod allocation_model;
mod strategic;
mod tactical;


pub use allocation_model::{
    AssetCategory, HorizonBucket, RiskProfile, StrategicAllocation, SubAllocation, SubCategory,
    SubWeight,
};
pub use strategic::{allocate, grid_weights};
pub use tactical::{proportional_split, TacticalAllocator};
