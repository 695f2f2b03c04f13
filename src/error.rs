// RSA Error Types
// Every failure the library reports to its caller

use std::io;

use thiserror::Error;

use crate::rsa::bigint::RsaBigInt;

#[derive(Debug, Error)]
pub enum RsaError {
    #[error("modulus must be greater than zero")]
    InvalidModulus,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("symbol {symbol} at position {index} is not below the modulus {modulus}")]
    SymbolOutOfRange {
        index: usize,
        symbol: RsaBigInt,
        modulus: RsaBigInt,
    },

    #[error("recovered symbol {symbol} at position {index} does not fit in a byte")]
    SymbolNotByte { index: usize, symbol: RsaBigInt },

    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("invalid ciphertext token `{token}` at position {index}")]
    InvalidCiphertext { index: usize, token: String },

    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("key file error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;
