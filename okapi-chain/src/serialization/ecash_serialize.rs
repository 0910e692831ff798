use std::{io, sync::Arc};

use super::WriteEcashExt;

/// Consensus-critical serialization for eCash.
///
/// This trait provides a generic serialization for consensus-critical
/// formats, such as network messages, transactions, blocks, etc. It is intended
/// for use only in consensus-critical contexts; in other contexts, such as
/// internal storage, it would be preferable to use Serde.
pub trait EcashSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical format.
    ///
    /// This function has an `ecash_` prefix to alert the reader that the
    /// serialization in use is consensus-critical serialization, rather than
    /// some other kind of serialization.
    ///
    /// Notice that the error type is [`std::io::Error`]; this indicates that
    /// serialization MUST be infallible up to errors in the underlying writer.
    /// In other words, any type implementing `EcashSerialize` must make illegal
    /// states unrepresentable.
    fn ecash_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Helper function to construct a vec to serialize the current struct into
    fn ecash_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.ecash_serialize(&mut data)?;
        Ok(data)
    }
}

/// Serialize a `Vec` as a compactsize number of items, then the items. This is
/// the most common format in the Bitcoin wire protocol.
///
/// See `ecash_serialize_external_count` for more details, and usage information.
impl<T: EcashSerialize> EcashSerialize for Vec<T> {
    fn ecash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_compactsize(self.len() as u64)?;
        ecash_serialize_external_count(self, writer)
    }
}

/// Serialize an `Arc`'d value by serializing the value it points to.
impl<T: EcashSerialize> EcashSerialize for Arc<T> {
    fn ecash_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        T::ecash_serialize(self, writer)
    }
}

/// Serialize a byte vector as a compactsize number of items, then the items.
///
/// # Correctness
///
/// Most eCash types have specific rules about serialization of `Vec<u8>`s.
/// Check the consensus rules before using this function.
///
/// See `ecash_serialize_bytes_external_count` for more details, and usage information.
//
// we specifically want to serialize `Vec`s here, rather than generic slices
#[allow(clippy::ptr_arg)]
pub fn ecash_serialize_bytes<W: io::Write>(vec: &Vec<u8>, mut writer: W) -> Result<(), io::Error> {
    writer.write_compactsize(vec.len() as u64)?;
    ecash_serialize_bytes_external_count(vec, writer)
}

/// Serialize a typed `Vec` **without** writing the number of items as a
/// compactsize.
///
/// In the Bitcoin wire format, most arrays are stored as a compactsize,
/// followed by that number of items of type `T`. But a few formats serialize
/// an array's contents in one location while its count is determined by other
/// data, or by a consensus rule.
///
/// ## Usage
///
/// Use `ecash_serialize_external_count` when the array count is determined by
/// other data, or a consensus rule.
///
/// Use `Vec::ecash_serialize` for data that contains a compactsize count,
/// followed by the data array.
///
/// This function has an `ecash_` prefix to alert the reader that the
/// serialization in use is consensus-critical serialization, rather than
/// some other kind of serialization.
//
// we specifically want to serialize `Vec`s here, rather than generic slices
#[allow(clippy::ptr_arg)]
pub fn ecash_serialize_external_count<W: io::Write, T: EcashSerialize>(
    vec: &Vec<T>,
    mut writer: W,
) -> Result<(), io::Error> {
    for x in vec {
        x.ecash_serialize(&mut writer)?;
    }
    Ok(())
}

/// Serialize a raw byte `Vec` **without** writing the number of items as a
/// compactsize.
///
/// This is a convenience alias for `writer.write_all(&vec)`.
//
// we specifically want to serialize `Vec`s here, rather than generic slices
#[allow(clippy::ptr_arg)]
pub fn ecash_serialize_bytes_external_count<W: io::Write>(
    vec: &Vec<u8>,
    mut writer: W,
) -> Result<(), io::Error> {
    writer.write_all(vec)
}
