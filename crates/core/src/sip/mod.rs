//! SIP module - return estimation and monthly contribution solving.

mod sip_calculator;
mod sip_model;


pub use sip_calculator::{calculate_monthly_sip, estimate_portfolio_return, solve_sip};
pub use sip_model::{AssetMix, ReturnAssumptions, ReturnModelTrait, SipResult};
