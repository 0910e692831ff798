//! Consensus parameters for each eCash network.
//!
//! This module contains the consensus parameters which are required for
//! parsing.
//!
//! Some consensus parameters change based on network upgrades. Each network
//! upgrade happens at a particular block height. Some parameters have a value
//! (or function) before the upgrade height, at the upgrade height, and after
//! the upgrade height.
//!
//! Typically, consensus parameters are accessed via a function that takes a
//! `Network` and `block::Height`.

mod genesis;
mod network;
mod network_upgrade;

pub use genesis::*;
pub use network::{magics, InvalidNetworkError, Magic, Network};
pub use network_upgrade::NetworkUpgrade;

#[cfg(test)]
mod tests;
