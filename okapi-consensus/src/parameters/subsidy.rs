//! Constants for block subsidy and the miner fund.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;

use okapi_chain::{amount::COIN, block::Height, parameters::Network, transparent};

/// The number of blocks between subsidy halvings.
///
/// eCash inherits the Bitcoin subsidy schedule: the block subsidy halves
/// every 210,000 blocks, about every four years at a ten minute block time.
pub const SUBSIDY_HALVING_INTERVAL: Height = Height(210_000);

/// The number of blocks between subsidy halvings on the regression test
/// network, chosen so tests can cross halvings quickly.
pub const REGTEST_SUBSIDY_HALVING_INTERVAL: Height = Height(150);

/// The largest block subsidy, used before the first halving.
pub const MAX_BLOCK_SUBSIDY: u64 = (50 * COIN) as u64;

/// The percentage of the coinbase value that must be paid to the miner
/// fund, when the fund is enforced.
pub const MINER_FUND_RATIO: u64 = 8;

/// Miner fund destinations for mainnet, as `(era activation time, address)`
/// pairs in era order.
///
/// An era begins when the block's median-time-past reaches the era's
/// activation time. The latest era that has begun provides the required
/// destination; destinations from earlier eras are actively rejected.
///
/// # Correctness
///
/// Don't use this directly; use [`FUND_DESTINATIONS`].
pub const FUND_DESTINATIONS_MAINNET: &[(i64, &str)] = &[
    // 2020-11-15 12:00:00 UTC
    (
        1_605_441_600,
        "ecash:pqnqv9lt7e5vjyp0w88zf2af0l92l8rxdg2jj94l5j",
    ),
    // 2021-05-15 12:00:00 UTC
    (
        1_621_080_000,
        "ecash:prfhcnyqnl5cgrnmlfmms675w93ld7mvvqd0y8lz07",
    ),
];

/// Miner fund destinations for testnet.
///
/// # Correctness
///
/// Don't use this directly; use [`FUND_DESTINATIONS`].
pub const FUND_DESTINATIONS_TESTNET: &[(i64, &str)] = &[
    // 2020-11-15 12:00:00 UTC
    (
        1_605_441_600,
        "ectest:pqnqv9lt7e5vjyp0w88zf2af0l92l8rxdgvev9jjhr",
    ),
    // 2021-05-15 12:00:00 UTC
    (
        1_621_080_000,
        "ectest:prfhcnyqnl5cgrnmlfmms675w93ld7mvvqty68c0v0",
    ),
];

/// Miner fund destinations for the regression test network.
///
/// # Correctness
///
/// Don't use this directly; use [`FUND_DESTINATIONS`].
pub const FUND_DESTINATIONS_REGTEST: &[(i64, &str)] = &[
    // 2020-11-15 12:00:00 UTC
    (
        1_605_441_600,
        "ecregtest:pqnqv9lt7e5vjyp0w88zf2af0l92l8rxdgz0wv9ltl",
    ),
    // 2021-05-15 12:00:00 UTC
    (
        1_621_080_000,
        "ecregtest:prfhcnyqnl5cgrnmlfmms675w93ld7mvvq9jcw0zsn",
    ),
];

lazy_static! {
    /// The parsed miner fund destinations for each network, in era order.
    ///
    /// Each entry pairs the median-time-past at which the era begins with
    /// the destination address for that era.
    pub static ref FUND_DESTINATIONS: HashMap<Network, Vec<(DateTime<Utc>, transparent::Address)>> =
        Network::iter()
            .map(|network| {
                let destinations = match network {
                    Network::Mainnet => FUND_DESTINATIONS_MAINNET,
                    Network::Testnet => FUND_DESTINATIONS_TESTNET,
                    Network::Regtest => FUND_DESTINATIONS_REGTEST,
                }
                .iter()
                .map(|&(time, address)| {
                    (
                        Utc.timestamp_opt(time, 0)
                            .single()
                            .expect("hard-coded era times are valid timestamps"),
                        address
                            .parse()
                            .expect("hard-coded miner fund addresses are valid"),
                    )
                })
                .collect();

                (network, destinations)
            })
            .collect();
}
