//! Validate coinbase transaction rewards as described in the eCash
//! block reward schedule and miner fund rules.

pub mod general;
pub mod miner_fund;
