//! Bitcoin-style scripts for eCash.

#![allow(clippy::unit_arg)]

use crate::serialization::{
    ecash_serialize_bytes, EcashDeserialize, EcashSerialize, SerializationError,
};

use std::{fmt, io};

/// An encoding of an eCash script.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a new eCash script from its raw bytes.
    /// The raw bytes must not contain the length prefix.
    pub fn new(raw_bytes: &[u8]) -> Self {
        Script(raw_bytes.to_vec())
    }

    /// Return the raw bytes of the script without the length prefix.
    ///
    /// # Correctness
    ///
    /// These raw bytes do not have a length prefix.
    /// The eCash serialization format requires a length prefix; use `ecash_serialize`
    /// and `ecash_deserialize` to create byte data with a length prefix.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Script")
            .field(&hex::encode(&self.0))
            .finish()
    }
}

impl EcashSerialize for Script {
    fn ecash_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        ecash_serialize_bytes(&self.0, &mut writer)
    }
}

impl EcashDeserialize for Script {
    fn ecash_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError> {
        Ok(Script(Vec::ecash_deserialize(reader)?))
    }
}
