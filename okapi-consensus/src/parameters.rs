//! The consensus parameters for each eCash network.
//!
//! This module contains the consensus parameters which are required for
//! verification.
//!
//! Some consensus parameters change based on network upgrades, and some
//! change based on the time recorded on the chain itself. (For example, the
//! miner fund destination rotates when the median-time-past of the chain
//! reaches a new fund era.)
//!
//! Typically, consensus parameters are accessed via a function that takes a
//! `Network` and a `block::Height` or a median-time-past.

pub mod subsidy;

pub use subsidy::*;
