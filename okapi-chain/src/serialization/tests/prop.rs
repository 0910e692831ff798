//! Property tests for the wire format helpers.

use std::io::Cursor;

use proptest::prelude::*;

use crate::{
    block::MAX_BLOCK_BYTES,
    serialization::{ReadEcashExt, WriteEcashExt},
};

proptest! {
    /// Check that every size up to the maximum block size round-trips through
    /// the shortest-form encoding.
    #[test]
    fn compactsize_roundtrip(size in 0..=MAX_BLOCK_BYTES) {
        let _init_guard = okapi_test::init();

        let mut buf = Vec::new();
        buf.write_compactsize(size).expect("writing to a Vec never fails");

        let read_back = Cursor::new(&buf)
            .read_compactsize()
            .expect("written sizes are canonical and within the limit");

        prop_assert_eq!(size, read_back);
    }
}
