//! Configuration for semantic block verification.

use serde::{Deserialize, Serialize};

use okapi_chain::parameters::Network;

/// Configuration for semantic block verification.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Override for the miner fund coinbase rule.
    ///
    /// The miner fund is enforced by default on mainnet and testnet, and
    /// disabled by default on regtest. Setting this option overrides the
    /// default on any network.
    pub enable_miner_fund: Option<bool>,
}

// we like our default configs to be explicit
#[allow(unknown_lints)]
#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            enable_miner_fund: None,
        }
    }
}

impl Config {
    /// Returns `true` if the miner fund rule is enforced on `network`.
    pub fn miner_fund_enabled(&self, network: Network) -> bool {
        self.enable_miner_fund
            .unwrap_or(network != Network::Regtest)
    }
}
