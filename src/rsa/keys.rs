// RSA Key Material
// Immutable (N, e, d) triples and the public/private halves handed to encrypt/decrypt

use num_traits::{One, Zero};

use super::bigint::{from_u64, gcd, lcm, mod_inverse, mod_pow_uint, RsaBigInt};
use crate::error::{RsaError, RsaResult};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// A validated (N, e, d) triple.
///
/// Fields are private so a `KeyMaterial` can only come out of a constructor
/// that checked `N > 1` and `0 < e, d < N`. It is never mutated afterwards and
/// can be shared freely across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    n: RsaBigInt,
    e: RsaBigInt,
    d: RsaBigInt,
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("d", &"<redacted>")
            .finish()
    }
}

impl PublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a sequence of symbols with this key
    pub fn encrypt(&self, symbols: &[RsaBigInt]) -> RsaResult<Vec<RsaBigInt>> {
        super::encrypt::encrypt_symbols(symbols, self)
    }
}

impl PrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a sequence of ciphertext symbols with this key
    pub fn decrypt(&self, ciphertext: &[RsaBigInt]) -> RsaResult<Vec<RsaBigInt>> {
        super::decrypt::decrypt_symbols(ciphertext, self)
    }
}

impl KeyMaterial {
    /// Build key material from an externally supplied triple.
    ///
    /// Only the range invariants are checked here; whether `e` and `d` are
    /// actually inverse cannot be decided without the factors of `n`, see
    /// [`KeyMaterial::verify`] and [`KeyMaterial::from_primes`].
    pub fn new(n: RsaBigInt, e: RsaBigInt, d: RsaBigInt) -> RsaResult<Self> {
        if n.is_zero() {
            return Err(RsaError::InvalidModulus);
        }
        if n.is_one() {
            return Err(RsaError::InvalidKey("modulus must be greater than 1".to_string()));
        }
        if e.is_zero() || e >= n {
            return Err(RsaError::InvalidKey(format!("public exponent {} not in (0, {})", e, n)));
        }
        if d.is_zero() || d >= n {
            return Err(RsaError::InvalidKey("private exponent not in (0, N)".to_string()));
        }

        Ok(Self { n, e, d })
    }

    /// Derive key material from two primes and a public exponent.
    ///
    /// N = p*q and d = e^(-1) mod lcm(p-1, q-1). The primes are taken on trust:
    /// no primality test is run.
    pub fn from_primes(p: &RsaBigInt, q: &RsaBigInt, e: &RsaBigInt) -> RsaResult<Self> {
        let two = from_u64(2);
        if p < &two || q < &two {
            return Err(RsaError::InvalidKey("prime factors must be at least 2".to_string()));
        }
        if p == q {
            return Err(RsaError::InvalidKey("prime factors must be distinct".to_string()));
        }

        let n = p * q;
        let lambda = lcm(&(p - 1u8), &(q - 1u8));

        if !gcd(e, &lambda).is_one() {
            return Err(RsaError::InvalidKey(format!("e={} is not coprime with lcm(p-1, q-1)", e)));
        }

        let d = mod_inverse(e, &lambda)
            .ok_or_else(|| RsaError::InvalidKey("failed to compute modular inverse".to_string()))?;

        log::debug!("derived key material: {} bit modulus", n.bits());

        Self::new(n, e.clone(), d)
    }

    /// The fixed toy parameters of the classroom demonstration:
    /// p = 17, q = 11, N = 187, e = 7, d = 23.
    pub fn classroom() -> Self {
        Self {
            n: from_u64(187),
            e: from_u64(7),
            d: from_u64(23),
        }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            n: self.n.clone(),
            d: self.d.clone(),
        }
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Largest symbol this key can carry (N - 1)
    pub fn max_symbol(&self) -> RsaBigInt {
        &self.n - 1u8
    }

    /// Whether every byte value is a valid symbol under this key
    pub fn fits_bytes(&self) -> bool {
        self.n > from_u64(255)
    }

    /// Check the round-trip law for one sample symbol.
    pub fn verify(&self, sample: &RsaBigInt) -> RsaResult<bool> {
        if sample >= &self.n {
            return Err(RsaError::SymbolOutOfRange {
                index: 0,
                symbol: sample.clone(),
                modulus: self.n.clone(),
            });
        }

        let c = mod_pow_uint(sample, &self.e, &self.n)?;
        let m = mod_pow_uint(&c, &self.d, &self.n)?;
        Ok(&m == sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_key() {
        let key = KeyMaterial::classroom();
        assert_eq!(key.n(), &from_u64(187));
        assert_eq!(key.e(), &from_u64(7));
        assert_eq!(key.d(), &from_u64(23));
        assert_eq!(key.bit_length(), 8);
        assert_eq!(key.max_symbol(), from_u64(186));
        assert!(!key.fits_bytes());
    }

    #[test]
    fn test_from_primes_matches_classroom() {
        let key = KeyMaterial::from_primes(&from_u64(17), &from_u64(11), &from_u64(7)).unwrap();
        assert_eq!(key, KeyMaterial::classroom());
    }

    #[test]
    fn test_key_properties() {
        let p = from_u64(61);
        let q = from_u64(53);
        let key = KeyMaterial::from_primes(&p, &q, &from_u64(17)).unwrap();

        // Verify n = p * q
        assert_eq!(key.n(), &(&p * &q));
        assert!(key.fits_bytes());

        // Verify e * d ≡ 1 (mod λ(n))
        let lambda = lcm(&(&p - 1u8), &(&q - 1u8));
        let product = key.e() * key.d();
        assert_eq!(product % lambda, from_u64(1));
    }

    #[test]
    fn test_from_primes_rejects_bad_input() {
        let same = KeyMaterial::from_primes(&from_u64(11), &from_u64(11), &from_u64(7));
        assert!(matches!(same, Err(RsaError::InvalidKey(_))));

        let tiny = KeyMaterial::from_primes(&from_u64(1), &from_u64(11), &from_u64(7));
        assert!(matches!(tiny, Err(RsaError::InvalidKey(_))));

        // lcm(16, 10) = 80 shares a factor with 5
        let not_coprime = KeyMaterial::from_primes(&from_u64(17), &from_u64(11), &from_u64(5));
        assert!(matches!(not_coprime, Err(RsaError::InvalidKey(_))));
    }

    #[test]
    fn test_new_validates_ranges() {
        let zero = KeyMaterial::new(from_u64(0), from_u64(7), from_u64(23));
        assert!(matches!(zero, Err(RsaError::InvalidModulus)));

        let one = KeyMaterial::new(from_u64(1), from_u64(7), from_u64(23));
        assert!(matches!(one, Err(RsaError::InvalidKey(_))));

        let big_e = KeyMaterial::new(from_u64(187), from_u64(187), from_u64(23));
        assert!(matches!(big_e, Err(RsaError::InvalidKey(_))));

        let zero_d = KeyMaterial::new(from_u64(187), from_u64(7), from_u64(0));
        assert!(matches!(zero_d, Err(RsaError::InvalidKey(_))));

        assert!(KeyMaterial::new(from_u64(187), from_u64(7), from_u64(23)).is_ok());
    }

    #[test]
    fn test_verify() {
        let key = KeyMaterial::classroom();
        assert!(key.verify(&from_u64(65)).unwrap());

        let wrong = KeyMaterial::new(from_u64(187), from_u64(7), from_u64(29)).unwrap();
        assert!(!wrong.verify(&from_u64(65)).unwrap());

        let out_of_range = key.verify(&from_u64(187));
        assert!(matches!(out_of_range, Err(RsaError::SymbolOutOfRange { .. })));
    }

    #[test]
    fn test_halves_share_modulus() {
        let key = KeyMaterial::classroom();
        let public_key = key.public_key();
        let private_key = key.private_key();
        assert_eq!(public_key.n, private_key.n);
        assert_eq!(public_key.bit_length(), private_key.bit_length());
    }

    #[test]
    fn test_debug_hides_private_exponent() {
        let rendered = format!("{:?}", KeyMaterial::classroom());
        assert!(rendered.contains("redacted"));
        assert!(!rendered.contains("23"));
    }
}
