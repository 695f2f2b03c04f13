// Ciphertext Text Forms
// Space-separated decimal (as the classroom page shows it) and hex renderings

use num_traits::Num;

use super::bigint::{from_bytes, to_bytes, RsaBigInt};
use crate::error::{RsaError, RsaResult};

/// Render ciphertext symbols as decimal numbers joined by single spaces
pub fn format_ciphertext(symbols: &[RsaBigInt]) -> String {
    symbols
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse whitespace-separated decimal ciphertext.
/// Blank text is an empty ciphertext, not an error.
pub fn parse_ciphertext(text: &str) -> RsaResult<Vec<RsaBigInt>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            // from_str_radix accepts a leading '+', which is not a ciphertext token
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid_token(index, token));
            }
            RsaBigInt::from_str_radix(token, 10).map_err(|_| invalid_token(index, token))
        })
        .collect()
}

/// Render ciphertext symbols as big-endian hex, space-separated
pub fn to_hex(symbols: &[RsaBigInt]) -> String {
    symbols
        .iter()
        .map(|c| hex::encode(to_bytes(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the output of [`to_hex`]
pub fn from_hex(text: &str) -> RsaResult<Vec<RsaBigInt>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            hex::decode(token)
                .map(|bytes| from_bytes(&bytes))
                .map_err(|_| invalid_token(index, token))
        })
        .collect()
}

fn invalid_token(index: usize, token: &str) -> RsaError {
    RsaError::InvalidCiphertext {
        index,
        token: token.to_string(),
    }
}
