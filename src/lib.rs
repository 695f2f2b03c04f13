//! Classroom RSA over arbitrary-precision integers.
//!
//! The kernel is [`rsa::mod_pow`], square-and-multiply modular exponentiation
//! that reduces every intermediate product. Encryption and decryption apply it
//! to each symbol of a message with the public or private exponent of an
//! explicitly constructed [`rsa::KeyMaterial`].

pub mod config;
pub mod error;
pub mod rsa;
pub mod util;

pub use error::{RsaError, RsaResult};
