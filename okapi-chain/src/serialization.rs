//! Consensus-critical serialization.
//!
//! This module contains four traits: `EcashSerialize` and `EcashDeserialize`,
//! analogs of the Serde `Serialize` and `Deserialize` traits but intended for
//! the consensus-critical Bitcoin wire format, and `ReadEcashExt` and
//! `WriteEcashExt`, extension traits for `io::Read` and `io::Write` with
//! utility functions for reading and writing in that format.

mod error;
mod read_ecash;
mod write_ecash;

mod ecash_deserialize;
mod ecash_serialize;

pub mod sha256d;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod arbitrary;


pub use error::SerializationError;
pub use read_ecash::ReadEcashExt;
pub use write_ecash::WriteEcashExt;

pub use ecash_deserialize::{
    ecash_deserialize_bytes_external_count, ecash_deserialize_external_count, EcashDeserialize,
    EcashDeserializeInto, TrustedPreallocate, MAX_U8_ALLOCATION,
};
pub use ecash_serialize::{
    ecash_serialize_bytes, ecash_serialize_bytes_external_count, ecash_serialize_external_count,
    EcashSerialize,
};
