//! eCash script opcodes.

/// Supported opcodes
///
/// <https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/script/script.h>
pub enum OpCode {
    // Opcodes used to generate P2SH scripts.
    Equal = 0x87,
    Hash160 = 0xa9,
    Push20Bytes = 0x14,
    // Additional opcodes used to generate P2PKH scripts.
    Dup = 0x76,
    EqualVerify = 0x88,
    CheckSig = 0xac,
}
