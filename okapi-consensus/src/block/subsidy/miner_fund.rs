//! Miner fund rules for eCash coinbase transactions.
//!
//! From the Axion upgrade onwards, a ratio of the coinbase value must be
//! paid to a protocol-defined fund address, selected by the median-time-past
//! of the chain tip.

use chrono::{DateTime, Utc};

use okapi_chain::{
    amount::{self, Amount, NonNegative},
    parameters::Network,
    transaction::Transaction,
    transparent,
};

use crate::parameters::subsidy::{FUND_DESTINATIONS, MINER_FUND_RATIO};

/// The amount the coinbase must pay to the miner fund, given the total value
/// of its outputs.
///
/// # Consensus
///
/// The required amount is [`MINER_FUND_RATIO`] percent of the total coinbase
/// value, rounded down to the next satoshi.
pub fn miner_fund_amount(
    total_subsidy: Amount<NonNegative>,
) -> Result<Amount<NonNegative>, amount::Error> {
    // The multiplication can exceed the money supply limit, so it is done in
    // i128 before converting back to an amount.
    let fund = i128::from(total_subsidy.satoshis()) * i128::from(MINER_FUND_RATIO) / 100;

    fund.try_into()
}

/// The miner fund destinations on `network` at `median_time_past`.
///
/// Returns the retired destinations of earlier fund eras and the current
/// destination, or `None` before the first era has begun.
///
/// A fund era begins when the median-time-past of the chain tip reaches the
/// era's start time.
pub fn fund_destinations(
    network: Network,
    median_time_past: DateTime<Utc>,
) -> Option<(Vec<transparent::Address>, transparent::Address)> {
    let eras = FUND_DESTINATIONS
        .get(&network)
        .expect("fund destinations are recorded for every network");

    let begun: Vec<transparent::Address> = eras
        .iter()
        .filter(|(start, _)| *start <= median_time_past)
        .map(|(_, address)| address.clone())
        .collect();

    let (current, retired) = begun.split_last()?;

    Some((retired.to_vec(), current.clone()))
}

/// Returns the outputs of `transaction` that pay `address`, in output order.
pub fn find_outputs_with_address(
    transaction: &Transaction,
    address: &transparent::Address,
) -> Vec<transparent::Output> {
    let script = address.script();

    transaction
        .outputs
        .iter()
        .filter(|output| output.lock_script == script)
        .cloned()
        .collect()
}
