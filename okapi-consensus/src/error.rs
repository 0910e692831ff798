//! Errors that can occur when checking consensus rules.
//!
//! Each error variant corresponds to a consensus rule, so enumerating
//! all possible verification failures enumerates the consensus rules we
//! implement, and ensures that we don't reject blocks or transactions
//! for a non-enumerated reason.

use thiserror::Error;

use okapi_chain::amount;

/// Errors for the miner fund coinbase rule.
///
/// All variants surface to peers as the single reject code
/// `bad-cb-minerfund`; the variant is kept for logs and metrics.
#[allow(missing_docs)]
#[derive(Error, Debug, PartialEq)]
pub enum MinerFundError {
    #[error("no coinbase output pays the miner fund destination")]
    NoFundOutput,

    #[error("the coinbase outputs paying the miner fund are all below the minimum fund amount")]
    InsufficientAmount,

    #[error("a coinbase output pays a retired miner fund destination")]
    WrongDestination,
}

impl MinerFundError {
    /// Returns the stable peer-facing reject code for this error.
    pub fn rejection_code(&self) -> &'static str {
        "bad-cb-minerfund"
    }
}

#[allow(missing_docs)]
#[derive(Error, Debug, PartialEq)]
pub enum SubsidyError {
    #[error("no coinbase transaction in block")]
    NoCoinbase,

    #[error("the sum of the coinbase outputs is greater than the block subsidy")]
    ExcessiveCoinbaseValue,

    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] amount::Error),
}

#[allow(missing_docs)]
#[derive(Error, Debug, PartialEq)]
pub enum TransactionError {
    #[error("first transaction must be coinbase")]
    CoinbasePosition,

    #[error("coinbase input found in non-coinbase transaction")]
    CoinbaseAfterFirst,

    #[error("coinbase transaction failed subsidy validation")]
    Subsidy(#[from] SubsidyError),

    #[error("coinbase transaction failed miner fund validation")]
    MinerFund(#[from] MinerFundError),
}

impl From<SubsidyError> for BlockError {
    fn from(err: SubsidyError) -> BlockError {
        BlockError::Transaction(TransactionError::Subsidy(err))
    }
}

impl From<MinerFundError> for BlockError {
    fn from(err: MinerFundError) -> BlockError {
        BlockError::Transaction(TransactionError::MinerFund(err))
    }
}

#[allow(missing_docs)]
#[derive(Error, Debug, PartialEq)]
pub enum BlockError {
    #[error("block contains invalid transactions")]
    Transaction(#[from] TransactionError),

    #[error("block has no transactions")]
    NoTransactions,

    #[error("block has mismatched merkle root")]
    BadMerkleRoot {
        actual: okapi_chain::block::merkle::Root,
        expected: okapi_chain::block::merkle::Root,
    },

    #[error("block contains duplicate transactions")]
    DuplicateTransaction,

    #[error("invalid block {0:?}: missing block height")]
    MissingHeight(okapi_chain::block::Hash),

    #[error("invalid block height {0:?} in {1:?}: greater than the maximum height {2:?}")]
    MaxHeight(
        okapi_chain::block::Height,
        okapi_chain::block::Hash,
        okapi_chain::block::Height,
    ),

    #[error("invalid block time: {0}")]
    Time(#[from] okapi_chain::block::BlockTimeError),
}

impl BlockError {
    /// Returns the stable peer-facing reject code for this error, if the
    /// rule it checks has one.
    pub fn rejection_code(&self) -> Option<&'static str> {
        match self {
            BlockError::Transaction(TransactionError::MinerFund(err)) => {
                Some(err.rejection_code())
            }
            BlockError::Transaction(TransactionError::Subsidy(
                SubsidyError::ExcessiveCoinbaseValue,
            )) => Some("bad-cb-amount"),
            _ => None,
        }
    }
}
