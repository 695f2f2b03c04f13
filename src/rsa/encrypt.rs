// RSA Encryption Implementation
// Applies C = M^e mod N to each symbol, preserving order

use super::bigint::{from_u64, mod_pow_uint, RsaBigInt};
use super::keys::PublicKey;
use crate::error::{RsaError, RsaResult};

/// Raise one symbol to `exponent` mod `modulus`, rejecting symbols ≥ modulus.
pub(super) fn transform_symbol(
    index: usize,
    symbol: &RsaBigInt,
    exponent: &RsaBigInt,
    modulus: &RsaBigInt,
) -> RsaResult<RsaBigInt> {
    if symbol >= modulus {
        return Err(RsaError::SymbolOutOfRange {
            index,
            symbol: symbol.clone(),
            modulus: modulus.clone(),
        });
    }
    mod_pow_uint(symbol, exponent, modulus)
}

/// Encrypt a sequence of symbols using RSA public key
/// Returns one ciphertext symbol per input symbol, in the same order
pub fn encrypt_symbols(symbols: &[RsaBigInt], public_key: &PublicKey) -> RsaResult<Vec<RsaBigInt>> {
    log::debug!(
        "encrypting {} symbols with {} bit key",
        symbols.len(),
        public_key.bit_length()
    );

    symbols
        .iter()
        .enumerate()
        .map(|(index, m)| transform_symbol(index, m, &public_key.e, &public_key.n))
        .collect()
}

/// Encrypt bytes using RSA public key, one symbol per byte
pub fn encrypt_bytes(plaintext: &[u8], public_key: &PublicKey) -> RsaResult<Vec<RsaBigInt>> {
    let symbols: Vec<RsaBigInt> = plaintext.iter().map(|&b| from_u64(b as u64)).collect();
    encrypt_symbols(&symbols, public_key)
}

/// Encrypt a string using RSA public key (its UTF-8 bytes)
pub fn encrypt_str(plaintext: &str, public_key: &PublicKey) -> RsaResult<Vec<RsaBigInt>> {
    encrypt_bytes(plaintext.as_bytes(), public_key)
}
