//! Consensus serialization for blocks and block headers.

use std::io;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::{TimeZone, Utc};

use crate::{
    serialization::{
        EcashDeserialize, EcashDeserializeInto, EcashSerialize, ReadEcashExt, SerializationError,
    },
    work::difficulty::CompactDifficulty,
};

use super::{merkle, Block, Hash, Header};

/// The maximum size of an eCash block, in bytes.
///
/// This is the default excessive block size inherited from the May 2018
/// protocol upgrade: 32 MB.
pub const MAX_BLOCK_BYTES: u64 = 32_000_000;

impl EcashSerialize for Header {
    fn ecash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_u32::<LittleEndian>(self.version)?;
        self.previous_block_hash.ecash_serialize(&mut writer)?;
        writer.write_all(&self.merkle_root.0[..])?;
        writer.write_u32::<LittleEndian>(
            self.time
                .timestamp()
                .try_into()
                .expect("deserialized and generated timestamps are u32 values"),
        )?;
        writer.write_u32::<LittleEndian>(self.difficulty_threshold.bits())?;
        writer.write_u32::<LittleEndian>(self.nonce)?;
        Ok(())
    }
}

impl EcashDeserialize for Header {
    fn ecash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let version = reader.read_u32::<LittleEndian>()?;
        let previous_block_hash = Hash::ecash_deserialize(&mut reader)?;
        let merkle_root = merkle::Root(reader.read_32_bytes()?);
        let time = reader.read_u32::<LittleEndian>()?;
        let difficulty_threshold = CompactDifficulty::from(reader.read_u32::<LittleEndian>()?);
        let nonce = reader.read_u32::<LittleEndian>()?;

        Ok(Header {
            version,
            previous_block_hash,
            merkle_root,
            // This can't panic, because all u32 values are valid `Utc.timestamp`s.
            time: Utc
                .timestamp_opt(time.into(), 0)
                .single()
                .expect("in-range number of seconds and valid nanosecond"),
            difficulty_threshold,
            nonce,
        })
    }
}

impl EcashSerialize for Block {
    fn ecash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        self.header.ecash_serialize(&mut writer)?;
        self.transactions.ecash_serialize(&mut writer)?;
        Ok(())
    }
}

impl EcashDeserialize for Block {
    fn ecash_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        // # Consensus
        //
        // The serialized size of a block must not exceed the excessive block
        // size.
        //
        // If the limit is reached, we'll get an UnexpectedEof error.
        let mut limited_reader = reader.take(MAX_BLOCK_BYTES);
        Ok(Block {
            header: Header::ecash_deserialize(&mut limited_reader)?,
            transactions: (&mut limited_reader).ecash_deserialize_into()?,
        })
    }
}
