//! CashAddr string encoding for eCash addresses.
//!
//! CashAddr is a base32 encoding with a 40-bit BCH checksum. eCash uses it
//! for all transparent address types, with a network prefix like `ecash:`.
//!
//! <https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/doc/standards/cashaddr.md>

use crate::serialization::SerializationError;

/// The base32 alphabet used by CashAddr payloads.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Compute the CashAddr BCH checksum over a sequence of 5-bit groups.
///
/// Returns zero if and only if `values` ends in a valid checksum.
fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x0007_ffff_ffff) << 5) ^ u64::from(d);
        if c0 & 0x01 != 0 {
            c ^= 0x98_f2bc_8e61;
        }
        if c0 & 0x02 != 0 {
            c ^= 0x79_b76d_99e2;
        }
        if c0 & 0x04 != 0 {
            c ^= 0xf3_3e5f_b3c4;
        }
        if c0 & 0x08 != 0 {
            c ^= 0xae_2eab_e2a8;
        }
        if c0 & 0x10 != 0 {
            c ^= 0x1e_4f43_e470;
        }
    }
    c ^ 1
}

/// Expand an address prefix for checksum computation: the lower 5 bits of
/// each character, followed by a zero separator.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    prefix
        .bytes()
        .map(|b| b & 0x1f)
        .chain(std::iter::once(0))
        .collect()
}

/// Repack the bits of `data` from `from`-bit groups into `to`-bit groups.
///
/// On encode (8 to 5 bits) the final group is zero-padded. On decode (5 to
/// 8 bits) anything beyond the last full group must be zero padding, and is
/// discarded.
fn convert_bits(
    data: &[u8],
    from: u32,
    to: u32,
    pad: bool,
) -> Result<Vec<u8>, SerializationError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value = (1u32 << to) - 1;
    let mut out = Vec::with_capacity((data.len() * from as usize).div_ceil(to as usize));

    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(SerializationError::Parse("cashaddr group out of range"));
        }
        acc = (acc << from) | u32::from(value);
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || (acc << (to - bits)) & max_value != 0 {
        return Err(SerializationError::Parse("invalid cashaddr padding"));
    }

    Ok(out)
}

/// Encode `payload` as a CashAddr string with the given network `prefix`.
///
/// The payload is the address version byte followed by the hash bytes.
pub(super) fn encode(prefix: &str, payload: &[u8]) -> String {
    let payload = convert_bits(payload, 8, 5, true).expect("8-bit groups are always in range");

    let mut values = expand_prefix(prefix);
    values.extend_from_slice(&payload);
    values.extend_from_slice(&[0; 8]);
    let checksum = polymod(&values);

    let mut addr = String::with_capacity(prefix.len() + 1 + payload.len() + 8);
    addr.push_str(prefix);
    addr.push(':');
    for &group in &payload {
        addr.push(CHARSET[group as usize] as char);
    }
    for i in (0..8).rev() {
        addr.push(CHARSET[((checksum >> (5 * i)) & 0x1f) as usize] as char);
    }

    addr
}

/// Decode a CashAddr string into its network prefix and 8-bit payload.
///
/// The returned payload is the address version byte followed by the hash
/// bytes. The prefix must be explicit: bare payloads are rejected.
pub(super) fn decode(addr: &str) -> Result<(String, Vec<u8>), SerializationError> {
    let (prefix, payload_str) = addr
        .split_once(':')
        .ok_or(SerializationError::Parse("missing cashaddr prefix"))?;
    if prefix.is_empty() || payload_str.len() <= 8 {
        return Err(SerializationError::Parse("cashaddr too short"));
    }

    // Upper and lower case are both accepted, but mixed case is not.
    if addr.bytes().any(|b| b.is_ascii_uppercase())
        && addr.bytes().any(|b| b.is_ascii_lowercase())
    {
        return Err(SerializationError::Parse("mixed case in cashaddr"));
    }
    let prefix = prefix.to_ascii_lowercase();

    let mut values = Vec::with_capacity(payload_str.len());
    for ch in payload_str.bytes() {
        let ch = ch.to_ascii_lowercase();
        let group = CHARSET
            .iter()
            .position(|&c| c == ch)
            .ok_or(SerializationError::Parse("invalid cashaddr character"))?;
        values.push(group as u8);
    }

    let mut checked = expand_prefix(&prefix);
    checked.extend_from_slice(&values);
    if polymod(&checked) != 0 {
        return Err(SerializationError::Parse("invalid cashaddr checksum"));
    }

    let payload = convert_bits(&values[..values.len() - 8], 5, 8, false)?;
    Ok((prefix, payload))
}
