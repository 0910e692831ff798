//! Fixed test vectors for transparent inputs and outputs.

use hex::FromHex;

use okapi_test::prelude::*;

use crate::{
    block::Height,
    serialization::{EcashDeserialize, EcashSerialize, SerializationError},
    transparent::{CoinbaseData, Input},
};

/// The coinbase input of the shared Bitcoin and eCash genesis block.
const GENESIS_COINBASE_INPUT_HEX: &str = concat!(
    "0000000000000000000000000000000000000000000000000000000000000000",
    "ffffffff",
    "4d",
    "04ffff001d0104455468652054696d65732030332f4a616e2f323030392043686",
    "16e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f",
    "757420666f722062616e6b73",
    "ffffffff",
);

#[test]
fn genesis_coinbase_parses_as_height_zero() -> Result<()> {
    let _init_guard = okapi_test::init();

    let bytes = <Vec<u8>>::from_hex(GENESIS_COINBASE_INPUT_HEX)?;
    let input = Input::ecash_deserialize(&bytes[..])?;

    match &input {
        Input::Coinbase {
            height,
            data,
            sequence,
        } => {
            assert_eq!(*height, Height(0));
            // The genesis coinbase does not encode a height, so the whole
            // script stays in the data field.
            assert_eq!(data.as_ref().len(), 77);
            assert!(data.as_ref().ends_with(b"bailout for banks"));
            assert_eq!(*sequence, 0xffff_ffff);
        }
        Input::PrevOut { .. } => panic!("genesis coinbase input must parse as a coinbase"),
    }

    assert_eq!(input.ecash_serialize_to_vec()?, bytes);

    Ok(())
}

#[test]
fn coinbase_height_uses_canonical_encoding() -> Result<()> {
    let _init_guard = okapi_test::init();

    // Heights at the boundaries of each encoding form, with the script
    // bytes that must represent them.
    let cases: [(u32, &[u8]); 10] = [
        (1, &[0x51]),
        (16, &[0x60]),
        (17, &[0x01, 17]),
        (127, &[0x01, 127]),
        (128, &[0x02, 0x80, 0x00]),
        (32_767, &[0x02, 0xff, 0x7f]),
        (32_768, &[0x03, 0x00, 0x80, 0x00]),
        (8_388_607, &[0x03, 0xff, 0xff, 0x7f]),
        (8_388_608, &[0x04, 0x00, 0x00, 0x80, 0x00]),
        (Height::MAX_AS_U32, &[0x04, 0xff, 0x64, 0xcd, 0x1d]),
    ];

    for (height, expected_script) in cases {
        let input = Input::Coinbase {
            height: Height(height),
            data: CoinbaseData::new(Vec::new()),
            sequence: 0,
        };
        let bytes = input.ecash_serialize_to_vec()?;

        // A 32 byte null hash and a 4 byte index, then the script with its
        // length prefix.
        assert_eq!(bytes[36] as usize, expected_script.len());
        assert_eq!(&bytes[37..37 + expected_script.len()], expected_script);

        assert_eq!(Input::ecash_deserialize(&bytes[..])?, input);
    }

    Ok(())
}

#[test]
fn coinbase_with_too_much_data_is_rejected() -> Result<()> {
    let _init_guard = okapi_test::init();

    let mut bytes = vec![0; 32];
    bytes.extend_from_slice(&[0xff; 4]);
    // A 101 byte script: one byte more than the consensus limit.
    bytes.push(101);
    bytes.push(0x51);
    bytes.extend_from_slice(&[0; 100]);
    bytes.extend_from_slice(&[0xff; 4]);

    assert!(matches!(
        Input::ecash_deserialize(&bytes[..]),
        Err(SerializationError::Parse("coinbase has too much data"))
    ));

    Ok(())
}

#[test]
fn coinbase_with_wrong_index_is_rejected() -> Result<()> {
    let _init_guard = okapi_test::init();

    let mut bytes = vec![0; 32];
    // Coinbase inputs must use the index 0xffff_ffff.
    bytes.extend_from_slice(&[0x00; 4]);
    bytes.push(1);
    bytes.push(0x51);
    bytes.extend_from_slice(&[0xff; 4]);

    assert!(matches!(
        Input::ecash_deserialize(&bytes[..]),
        Err(SerializationError::Parse("wrong index in coinbase"))
    ));

    Ok(())
}

#[test]
fn oversized_coinbase_height_is_rejected() -> Result<()> {
    let _init_guard = okapi_test::init();

    let mut bytes = vec![0; 32];
    bytes.extend_from_slice(&[0xff; 4]);
    bytes.push(5);
    // 500_000_000 is above the maximum block height.
    bytes.extend_from_slice(&[0x04, 0x00, 0x65, 0xcd, 0x1d]);
    bytes.extend_from_slice(&[0xff; 4]);

    assert!(matches!(
        Input::ecash_deserialize(&bytes[..]),
        Err(SerializationError::Parse("Invalid block height"))
    ));

    Ok(())
}
