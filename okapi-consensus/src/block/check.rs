//! Consensus check functions

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use okapi_chain::{
    amount::{Amount, NonNegative},
    block::{Block, Hash, Header, Height},
    parameters::{Network, NetworkUpgrade},
    transaction,
};

use crate::error::*;

use super::subsidy;

/// Returns `Ok(())` if there is exactly one coinbase transaction in `Block`,
/// and that coinbase transaction is the first transaction in the block.
///
/// The first (and only the first) transaction in a block is a coinbase
/// transaction, which collects the block subsidy and pays the miner fund.
pub fn coinbase_is_first(block: &Block) -> Result<(), BlockError> {
    let first = block
        .transactions
        .first()
        .ok_or(BlockError::NoTransactions)?;
    let mut rest = block.transactions.iter().skip(1);
    if !first.has_valid_coinbase_transaction_inputs() {
        Err(TransactionError::CoinbasePosition)?;
    }
    if rest.any(|tx| tx.has_any_coinbase_inputs()) {
        Err(TransactionError::CoinbaseAfterFirst)?;
    }

    Ok(())
}

/// Returns `Ok(())` if `header.time` is less than or equal to
/// 2 hours in the future, according to the node's local clock (`now`).
///
/// This is a non-deterministic rule, as clocks vary over time, and
/// between different nodes.
///
/// If the header time is invalid, returns an error containing `height` and
/// `hash`.
pub fn time_is_valid_at(
    header: &Header,
    now: DateTime<Utc>,
    height: &Height,
    hash: &Hash,
) -> Result<(), BlockError> {
    Ok(header.time_is_valid_at(now, height, hash)?)
}

/// Checks the merkle root against the block's transaction hashes.
///
/// `transaction_hashes` is a precomputed list of the hashes of the block's
/// transactions, in block order.
///
/// # Consensus
///
/// The merkle root is derived from the double-SHA256 hashes of all
/// transactions included in this block, ensuring that none of those
/// transactions can be modified without modifying the header.
pub fn merkle_root_validity(
    block: &Block,
    transaction_hashes: &[transaction::Hash],
) -> Result<(), BlockError> {
    let merkle_root = transaction_hashes.iter().cloned().collect();

    if block.header.merkle_root != merkle_root {
        return Err(BlockError::BadMerkleRoot {
            actual: merkle_root,
            expected: block.header.merkle_root,
        });
    }

    // Bitcoin's transaction merkle trees are malleable, allowing blocks
    // with duplicate transactions to have the same merkle root as blocks
    // without duplicate transactions (CVE-2012-2459).
    //
    // Collecting into a HashSet deduplicates, so this checks that there are
    // no duplicate transaction hashes.
    if transaction_hashes.len() != transaction_hashes.iter().collect::<HashSet<_>>().len() {
        return Err(BlockError::DuplicateTransaction);
    }

    Ok(())
}

/// Returns `Ok(())` if the coinbase value in `block` does not exceed the
/// block subsidy for its height on `network`.
///
/// # Consensus
///
/// Stateless verification has no fee information, so the ceiling is the
/// subsidy alone. The violation surfaces to peers as the reject code
/// `bad-cb-amount`.
pub fn subsidy_is_valid(block: &Block, network: Network) -> Result<(), BlockError> {
    let height = block.coinbase_height().ok_or(SubsidyError::NoCoinbase)?;
    let coinbase = block
        .transactions
        .first()
        .ok_or(SubsidyError::NoCoinbase)?;

    let total: Amount<NonNegative> = coinbase
        .output_values()
        .sum::<Result<_, _>>()
        .map_err(SubsidyError::from)?;
    let subsidy = subsidy::general::block_subsidy(height, network).map_err(SubsidyError::from)?;

    if total > subsidy {
        Err(SubsidyError::ExcessiveCoinbaseValue)?;
    }

    Ok(())
}

/// Returns `Ok(())` if the coinbase in `block` pays the miner fund as
/// required on `network` at `median_time_past`.
///
/// # Consensus
///
/// When the miner fund is enforced, the coinbase transaction must have at
/// least one output paying the current fund destination, and that output
/// must be worth at least the fund ratio of the total coinbase value,
/// rounded down. An output paying a destination from an earlier fund era
/// makes the coinbase invalid regardless of any other output.
///
/// All failures surface to peers as the single reject code
/// `bad-cb-minerfund`.
pub fn miner_fund_is_valid(
    block: &Block,
    network: Network,
    median_time_past: DateTime<Utc>,
    miner_fund_enabled: bool,
) -> Result<(), BlockError> {
    if !miner_fund_enabled {
        return Ok(());
    }

    let height = block.coinbase_height().ok_or(SubsidyError::NoCoinbase)?;
    let axion_height = NetworkUpgrade::Axion
        .activation_height(network)
        .expect("Axion activation height is recorded on every network");
    if height < axion_height {
        return Ok(());
    }

    // The fund only applies once its first era has begun.
    let Some((retired, current)) =
        subsidy::miner_fund::fund_destinations(network, median_time_past)
    else {
        return Ok(());
    };

    let coinbase = block
        .transactions
        .first()
        .ok_or(SubsidyError::NoCoinbase)?;

    let total: Amount<NonNegative> = coinbase
        .output_values()
        .sum::<Result<_, _>>()
        .map_err(SubsidyError::from)?;
    let required = subsidy::miner_fund::miner_fund_amount(total).map_err(SubsidyError::from)?;

    // An output paying a retired destination invalidates the coinbase even
    // when a sufficient current output is also present.
    for destination in &retired {
        if !subsidy::miner_fund::find_outputs_with_address(coinbase, destination).is_empty() {
            Err(MinerFundError::WrongDestination)?;
        }
    }

    let fund_outputs = subsidy::miner_fund::find_outputs_with_address(coinbase, &current);
    if fund_outputs.is_empty() {
        Err(MinerFundError::NoFundOutput)?;
    }
    if !fund_outputs.iter().any(|output| output.value >= required) {
        Err(MinerFundError::InsufficientAmount)?;
    }

    Ok(())
}
