// Parallel Symbol Transform
// Spreads the per-symbol exponentiation across rayon's thread pool

use rayon::prelude::*;

use super::bigint::{mod_pow_uint, RsaBigInt};
use super::keys::{PrivateKey, PublicKey};
use crate::error::{RsaError, RsaResult};

// Range check first so the reported symbol is the lowest out-of-range index,
// as in the sequential path. After it passes the map can only fail on a zero
// modulus, which is the same error for every symbol.
fn transform_all(symbols: &[RsaBigInt], exponent: &RsaBigInt, modulus: &RsaBigInt) -> RsaResult<Vec<RsaBigInt>> {
    if let Some(index) = symbols.par_iter().position_first(|s| s >= modulus) {
        return Err(RsaError::SymbolOutOfRange {
            index,
            symbol: symbols[index].clone(),
            modulus: modulus.clone(),
        });
    }

    symbols
        .par_iter()
        .map(|symbol| mod_pow_uint(symbol, exponent, modulus))
        .collect()
}

/// Parallel counterpart of [`encrypt_symbols`](super::encrypt::encrypt_symbols)
pub fn encrypt_symbols_par(symbols: &[RsaBigInt], public_key: &PublicKey) -> RsaResult<Vec<RsaBigInt>> {
    log::debug!(
        "encrypting {} symbols in parallel with {} bit key",
        symbols.len(),
        public_key.bit_length()
    );
    transform_all(symbols, &public_key.e, &public_key.n)
}

/// Parallel counterpart of [`decrypt_symbols`](super::decrypt::decrypt_symbols)
pub fn decrypt_symbols_par(ciphertext: &[RsaBigInt], private_key: &PrivateKey) -> RsaResult<Vec<RsaBigInt>> {
    log::debug!(
        "decrypting {} symbols in parallel with {} bit key",
        ciphertext.len(),
        private_key.bit_length()
    );
    transform_all(ciphertext, &private_key.d, &private_key.n)
}
