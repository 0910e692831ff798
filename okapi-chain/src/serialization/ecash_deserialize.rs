use std::{io, sync::Arc};

use crate::block::MAX_BLOCK_BYTES;

use super::{ReadEcashExt, SerializationError};

/// Consensus-critical deserialization for eCash.
///
/// This trait provides a generic deserialization for consensus-critical
/// formats, such as network messages, transactions, blocks, etc. It is intended
/// for use only in consensus-critical contexts; in other contexts, such as
/// internal storage, it would be preferable to use Serde.
pub trait EcashDeserialize: Sized {
    /// Try to read `self` from the given `reader`.
    ///
    /// This function has an `ecash_` prefix to alert the reader that the
    /// serialization in use is consensus-critical serialization, rather than
    /// some other kind of serialization.
    fn ecash_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError>;
}

/// Deserialize a `Vec`, where the number of items is set by a compactsize
/// prefix in the data. This is the most common format in the Bitcoin wire
/// protocol.
///
/// See `ecash_deserialize_external_count` for more details, and usage
/// information.
impl<T: EcashDeserialize + TrustedPreallocate> EcashDeserialize for Vec<T> {
    fn ecash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let len = reader.read_compactsize()?.try_into()?;
        ecash_deserialize_external_count(len, reader)
    }
}

/// Deserialize an `Arc`'d value by deserializing the pointed-to value.
impl<T: EcashDeserialize> EcashDeserialize for Arc<T> {
    fn ecash_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        Ok(Arc::new(T::ecash_deserialize(reader)?))
    }
}

/// Implement EcashDeserialize for Vec<u8> directly instead of using the blanket Vec implementation
///
/// This allows us to optimize the inner loop into a single call to `read_exact()`
/// Note that we don't implement TrustedPreallocate for u8.
/// This allows the optimization without relying on specialization.
impl EcashDeserialize for Vec<u8> {
    fn ecash_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let len = reader.read_compactsize()?.try_into()?;
        ecash_deserialize_bytes_external_count(len, reader)
    }
}

/// Deserialize a `Vec` containing `external_count` items.
///
/// In the Bitcoin wire format, most arrays are stored as a compactsize,
/// followed by that number of items of type `T`. But a few formats serialize
/// an array's contents in one location while its count is determined by other
/// data, or by a consensus rule.
///
/// ## Usage
///
/// Use `ecash_deserialize_external_count` when the array count is determined
/// by other data, or a consensus rule.
///
/// Use `Vec::ecash_deserialize` for data that contains a compactsize count,
/// followed by the data array.
///
/// This function has an `ecash_` prefix to alert the reader that the
/// serialization in use is consensus-critical serialization, rather than
/// some other kind of serialization.
pub fn ecash_deserialize_external_count<R: io::Read, T: EcashDeserialize + TrustedPreallocate>(
    external_count: usize,
    mut reader: R,
) -> Result<Vec<T>, SerializationError> {
    match u64::try_from(external_count) {
        Ok(external_count) if external_count > T::max_allocation() => {
            return Err(SerializationError::Parse(
                "Vector longer than max_allocation",
            ))
        }
        Ok(_) => {}
        // As of 2021, usize is less than or equal to 64 bits on all (or almost all?) supported Rust platforms.
        // So in practice this error is impossible. (But the check is required, because Rust is future-proof
        // for 128 bit memory spaces.)
        Err(_) => return Err(SerializationError::Parse("Vector longer than u64::MAX")),
    }
    let mut vec = Vec::with_capacity(external_count);
    for _ in 0..external_count {
        vec.push(T::ecash_deserialize(&mut reader)?);
    }
    Ok(vec)
}

/// `ecash_deserialize_external_count`, specialised for raw bytes.
///
/// This allows us to optimize the inner loop into a single call to `read_exact()`.
///
/// This function has an `ecash_` prefix to alert the reader that the
/// serialization in use is consensus-critical serialization, rather than
/// some other kind of serialization.
pub fn ecash_deserialize_bytes_external_count<R: io::Read>(
    external_count: usize,
    mut reader: R,
) -> Result<Vec<u8>, SerializationError> {
    if external_count > MAX_U8_ALLOCATION {
        return Err(SerializationError::Parse(
            "Byte vector longer than MAX_U8_ALLOCATION",
        ));
    }
    let mut vec = vec![0u8; external_count];
    reader.read_exact(&mut vec)?;
    Ok(vec)
}

/// Helper for deserializing more succinctly via type inference
pub trait EcashDeserializeInto {
    /// Deserialize based on type inference
    fn ecash_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: EcashDeserialize;
}

impl<R: io::Read> EcashDeserializeInto for R {
    fn ecash_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: EcashDeserialize,
    {
        T::ecash_deserialize(self)
    }
}

/// Blind preallocation of a Vec<T: TrustedPreallocate> is based on a bounded length. This is in contrast
/// to blind preallocation of a generic Vec<T>, which is a DOS vector.
///
/// The max_allocation() function provides a loose upper bound on the size of the Vec<T: TrustedPreallocate>
/// which can possibly be received from an honest peer. If this limit is too low, Okapi may reject valid
/// messages. In the worst case, setting the lower bound too low could cause Okapi to fall out of consensus
/// by rejecting all messages containing a valid block.
pub trait TrustedPreallocate {
    /// Provides a ***loose upper bound*** on the size of the Vec<T: TrustedPreallocate>
    /// which can possibly be received from an honest peer.
    fn max_allocation() -> u64;
}

/// The length of the longest valid `Vec<u8>` that can be received over the network
///
/// It takes 5 bytes to encode a compactsize representing any number between 2^16 and (2^32 - 1).
/// MAX_BLOCK_BYTES is ~2^25, so the largest Vec<u8> that can be received from an honest peer is
/// (MAX_BLOCK_BYTES - 5);
pub const MAX_U8_ALLOCATION: usize = MAX_BLOCK_BYTES as usize - 5;
