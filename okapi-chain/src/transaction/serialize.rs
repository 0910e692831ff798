//! Consensus serialization for transactions.

use std::{io, sync::Arc};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    block::MAX_BLOCK_BYTES,
    serialization::{
        EcashDeserialize, EcashSerialize, SerializationError, TrustedPreallocate,
    },
};

use super::{LockTime, Transaction};

impl EcashSerialize for Transaction {
    fn ecash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_u32::<LittleEndian>(self.version)?;
        self.inputs.ecash_serialize(&mut writer)?;
        self.outputs.ecash_serialize(&mut writer)?;
        self.lock_time.ecash_serialize(&mut writer)?;
        Ok(())
    }
}

impl EcashDeserialize for Transaction {
    fn ecash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(Transaction {
            version: reader.read_u32::<LittleEndian>()?,
            inputs: Vec::ecash_deserialize(&mut reader)?,
            outputs: Vec::ecash_deserialize(&mut reader)?,
            lock_time: LockTime::ecash_deserialize(&mut reader)?,
        })
    }
}

/// A serialized transaction takes at least 10 bytes: a 4 byte version, a
/// 1 byte input count, a 1 byte output count, and a 4 byte lock time.
pub(crate) const MIN_TRANSPARENT_TX_SIZE: u64 = 4 + 1 + 1 + 4;

impl TrustedPreallocate for Transaction {
    fn max_allocation() -> u64 {
        // A transaction is always at least MIN_TRANSPARENT_TX_SIZE bytes, so
        // no valid block can contain more transactions than this.
        MAX_BLOCK_BYTES / MIN_TRANSPARENT_TX_SIZE
    }
}

impl TrustedPreallocate for Arc<Transaction> {
    fn max_allocation() -> u64 {
        Transaction::max_allocation()
    }
}
