//! Block and miner subsidies and the halving schedule.

use okapi_chain::{
    amount::{self, Amount, NonNegative},
    block::Height,
    parameters::Network,
};

use crate::parameters::subsidy::*;

/// The interval between subsidy halvings on `network`.
///
/// Regtest uses a much shorter interval so that tests can cross halving
/// boundaries quickly.
pub fn subsidy_halving_interval(network: Network) -> Height {
    match network {
        Network::Mainnet | Network::Testnet => SUBSIDY_HALVING_INTERVAL,
        Network::Regtest => REGTEST_SUBSIDY_HALVING_INTERVAL,
    }
}

/// The divisor used to halve the block subsidy at `height`.
///
/// Returns `None` when 64 or more halvings have passed, where the shift
/// that computes the divisor is undefined. The block subsidy is zero from
/// that height onwards.
pub fn halving_divisor(height: Height, network: Network) -> Option<u64> {
    let halvings = height.0 / subsidy_halving_interval(network).0;

    if halvings < 64 {
        Some(1u64 << halvings)
    } else {
        None
    }
}

/// The block subsidy at `height`: 50 coins, cut in half at each halving
/// interval.
pub fn block_subsidy(
    height: Height,
    network: Network,
) -> Result<Amount<NonNegative>, amount::Error> {
    match halving_divisor(height, network) {
        // Force the block reward to zero where the right shift is undefined.
        None => Ok(Amount::zero()),
        Some(divisor) => (MAX_BLOCK_SUBSIDY / divisor).try_into(),
    }
}

/// The portion of the block subsidy left to the miner at `height`, after
/// deducting `fund_amount` for the miner fund.
pub fn miner_subsidy(
    height: Height,
    network: Network,
    fund_amount: Amount<NonNegative>,
) -> Result<Amount<NonNegative>, amount::Error> {
    block_subsidy(height, network)? - fund_amount
}
