use std::io;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::block::MAX_BLOCK_BYTES;

use super::SerializationError;

/// Extends [`Read`] with methods for reading eCash/Bitcoin types.
///
/// [`Read`]: std::io::Read
pub trait ReadEcashExt: io::Read {
    /// Reads a `u64` using the Bitcoin `CompactSize` encoding.
    ///
    /// # Security
    ///
    /// Deserialized sizes must be validated before being used.
    ///
    /// Preallocating vectors using untrusted `CompactSize`s allows memory
    /// denial of service attacks. Valid sizes must be less than
    /// `MAX_BLOCK_BYTES / min_serialized_item_bytes` (or a lower limit
    /// specified by the consensus rules or the network protocol).
    ///
    /// As a defence-in-depth for memory preallocation attacks, Okapi rejects
    /// sizes greater than the maximum block size. (These sizes should be
    /// impossible, because block messages are the largest messages Okapi
    /// deserializes, and each array item takes at least one byte.)
    ///
    /// # Examples
    ///
    /// ```
    /// use okapi_chain::serialization::ReadEcashExt;
    ///
    /// use std::io::Cursor;
    /// assert_eq!(
    ///     0x12,
    ///     Cursor::new(b"\x12")
    ///         .read_compactsize().unwrap()
    /// );
    /// assert_eq!(
    ///     0xfd,
    ///     Cursor::new(b"\xfd\xfd\x00")
    ///         .read_compactsize().unwrap()
    /// );
    /// assert_eq!(
    ///     0xaafd,
    ///     Cursor::new(b"\xfd\xfd\xaa")
    ///         .read_compactsize().unwrap()
    /// );
    /// ```
    ///
    /// Sizes greater than the maximum block size are invalid, they return a
    /// `Parse` error:
    /// ```
    /// # use okapi_chain::serialization::ReadEcashExt;
    /// # use std::io::Cursor;
    /// Cursor::new(b"\xfe\xfd\xaa\xbb\x02").read_compactsize().unwrap_err();
    /// Cursor::new(b"\xff\xfd\xaa\xbb\xcc\x22\x00\x00\x00").read_compactsize().unwrap_err();
    /// ```
    #[inline]
    fn read_compactsize(&mut self) -> Result<u64, SerializationError> {
        use SerializationError::Parse;
        let flag_byte = self.read_u8()?;
        let size = match flag_byte {
            n @ 0x00..=0xfc => Ok(n as u64),
            0xfd => match self.read_u16::<LittleEndian>()? {
                n @ 0x0000_00fd..=0x0000_ffff => Ok(n as u64),
                _ => Err(Parse("non-canonical compactsize")),
            },
            0xfe => match self.read_u32::<LittleEndian>()? {
                n @ 0x0001_0000..=0xffff_ffff => Ok(n as u64),
                _ => Err(Parse("non-canonical compactsize")),
            },
            0xff => match self.read_u64::<LittleEndian>()? {
                n @ 0x1_0000_0000..=0xffff_ffff_ffff_ffff => Ok(n),
                _ => Err(Parse("non-canonical compactsize")),
            },
        }?;

        // # Security
        // Defence-in-depth for memory DoS via preallocation.
        if size > MAX_BLOCK_BYTES {
            Err(Parse("compactsize larger than maximum block size"))?;
        }

        Ok(size)
    }

    /// Convenience method to read a `[u8; 32]`.
    #[inline]
    fn read_32_bytes(&mut self) -> io::Result<[u8; 32]> {
        let mut bytes = [0; 32];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

/// Mark all types implementing `Read` as implementing the extension.
impl<R: io::Read + ?Sized> ReadEcashExt for R {}
