//! Transactions and transaction-related structures.

mod hash;
mod lock_time;
mod serialize;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;
#[cfg(test)]
mod tests;

pub use hash::Hash;
pub use lock_time::LockTime;

use crate::{
    amount::{Amount, NonNegative},
    transparent,
};

/// An eCash transaction.
///
/// A transaction is an encoded data structure that facilitates the transfer
/// of value between public addresses on the eCash network. All eCash value is
/// transparent: a transaction spends previous transparent outputs and creates
/// new ones.
///
/// Version 1 and version 2 transactions share a wire format; version 2
/// introduced BIP 68 relative lock time semantics for sequence numbers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The version of this transaction.
    pub version: u32,
    /// The transparent inputs to the transaction.
    pub inputs: Vec<transparent::Input>,
    /// The transparent outputs from the transaction.
    pub outputs: Vec<transparent::Output>,
    /// The earliest time or block height that this transaction can be added
    /// to the chain.
    pub lock_time: LockTime,
}

impl Transaction {
    /// Compute the hash (id) of this transaction.
    ///
    /// The transaction id is the double SHA-256 of the serialized
    /// transaction.
    pub fn hash(&self) -> Hash {
        Hash::from(self)
    }

    /// Returns `true` if this transaction is a valid coinbase transaction:
    /// it has exactly one input, and that input is a coinbase input.
    pub fn has_valid_coinbase_transaction_inputs(&self) -> bool {
        self.inputs.len() == 1
            && matches!(
                self.inputs.first(),
                Some(transparent::Input::Coinbase { .. })
            )
    }

    /// Returns `true` if any of this transaction's inputs is a coinbase
    /// input.
    ///
    /// Unlike [`Transaction::has_valid_coinbase_transaction_inputs`], this
    /// also catches transactions that hide a coinbase input among previous
    /// output inputs.
    pub fn has_any_coinbase_inputs(&self) -> bool {
        self.inputs
            .iter()
            .any(|input| matches!(input, transparent::Input::Coinbase { .. }))
    }

    /// Returns the values of the outputs of this transaction.
    pub fn output_values(&self) -> impl Iterator<Item = &Amount<NonNegative>> {
        self.outputs.iter().map(|output| &output.value)
    }
}
