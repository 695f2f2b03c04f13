// RSA Decryption Implementation
// Applies M = C^d mod N to each ciphertext symbol, preserving order

use num_traits::ToPrimitive;

use super::bigint::RsaBigInt;
use super::encrypt::transform_symbol;
use super::keys::PrivateKey;
use crate::error::{RsaError, RsaResult};

/// Decrypt a sequence of ciphertext symbols using RSA private key
pub fn decrypt_symbols(ciphertext: &[RsaBigInt], private_key: &PrivateKey) -> RsaResult<Vec<RsaBigInt>> {
    log::debug!(
        "decrypting {} symbols with {} bit key",
        ciphertext.len(),
        private_key.bit_length()
    );

    ciphertext
        .iter()
        .enumerate()
        .map(|(index, c)| transform_symbol(index, c, &private_key.d, &private_key.n))
        .collect()
}

/// Narrow recovered symbols back to bytes
pub fn symbols_to_bytes(symbols: &[RsaBigInt]) -> RsaResult<Vec<u8>> {
    symbols
        .iter()
        .enumerate()
        .map(|(index, m)| {
            m.to_u8().ok_or_else(|| RsaError::SymbolNotByte {
                index,
                symbol: m.clone(),
            })
        })
        .collect()
}

/// Decrypt ciphertext to bytes, one byte per symbol
pub fn decrypt_to_bytes(ciphertext: &[RsaBigInt], private_key: &PrivateKey) -> RsaResult<Vec<u8>> {
    let symbols = decrypt_symbols(ciphertext, private_key)?;
    symbols_to_bytes(&symbols)
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(ciphertext: &[RsaBigInt], private_key: &PrivateKey) -> RsaResult<String> {
    let plaintext = decrypt_to_bytes(ciphertext, private_key)?;
    Ok(String::from_utf8(plaintext)?)
}
