// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod keys;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use bigint::{mod_pow, mod_pow_uint, RsaBigInt};
pub use codec::{format_ciphertext, from_hex, parse_ciphertext, to_hex};
pub use decrypt::{decrypt_symbols, decrypt_to_bytes, decrypt_to_string, symbols_to_bytes};
pub use encrypt::{encrypt_bytes, encrypt_str, encrypt_symbols};
pub use keys::{KeyMaterial, PrivateKey, PublicKey};
#[cfg(feature = "parallel")]
pub use parallel::{decrypt_symbols_par, encrypt_symbols_par};
