// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use std::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Modular exponentiation over signed inputs: base^exponent mod modulus.
///
/// The modulus is checked before the operands, so a call with both a bad
/// modulus and a negative base reports `InvalidModulus`.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> RsaResult<RsaBigInt> {
    if modulus.sign() != Sign::Plus {
        return Err(RsaError::InvalidModulus);
    }
    let base = base
        .to_biguint()
        .ok_or_else(|| RsaError::InvalidArgument(format!("base {} is negative", base)))?;
    let exponent = exponent
        .to_biguint()
        .ok_or_else(|| RsaError::InvalidArgument(format!("exponent {} is negative", exponent)))?;

    mod_pow_uint(&base, &exponent, modulus.magnitude())
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply, reducing after every product
pub fn mod_pow_uint(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaResult<RsaBigInt> {
    if modulus.is_zero() {
        return Err(RsaError::InvalidModulus);
    }
    if modulus.is_one() {
        return Ok(RsaBigInt::zero());
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);
        let next_t = &old_t - &q * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let m = BigInt::from(m.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from(a.clone()), &m);
    if !gcd.is_one() {
        return None;
    }

    x.mod_floor(&m).to_biguint()
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Least common multiple
pub fn lcm(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    if a.is_zero() || b.is_zero() {
        return RsaBigInt::zero();
    }
    (a * b) / gcd(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let result = mod_pow(&signed(3), &signed(5), &signed(7)).unwrap();
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_classroom_key() {
        // 'A' = 65 under N=187, e=7, d=23
        let c = mod_pow(&signed(65), &signed(7), &signed(187)).unwrap();
        assert_eq!(c, from_u64(142));

        let m = mod_pow(&signed(142), &signed(23), &signed(187)).unwrap();
        assert_eq!(m, from_u64(65));
    }

    #[test]
    fn test_mod_pow_zero_exponent() {
        for modulus in [1i64, 2, 7, 187, 65537] {
            for base in [0i64, 1, 5, 186, 1000] {
                let result = mod_pow(&signed(base), &signed(0), &signed(modulus)).unwrap();
                let expected = if modulus == 1 { 0 } else { 1 };
                assert_eq!(result, from_u64(expected), "base={} modulus={}", base, modulus);
            }
        }
    }

    #[test]
    fn test_mod_pow_modulus_one() {
        for (base, exp) in [(0i64, 0i64), (5, 3), (65537, 65537), (1, 100)] {
            let result = mod_pow(&signed(base), &signed(exp), &signed(1)).unwrap();
            assert!(result.is_zero());
        }
    }

    #[test]
    fn test_mod_pow_base_larger_than_modulus() {
        // 1000 ≡ 6 (mod 14), 6^3 = 216 ≡ 6 (mod 14)
        let result = mod_pow(&signed(1000), &signed(3), &signed(14)).unwrap();
        assert_eq!(result, from_u64(6));
    }

    #[test]
    fn test_mod_pow_invalid_modulus() {
        let zero = mod_pow(&signed(2), &signed(3), &signed(0));
        assert!(matches!(zero, Err(RsaError::InvalidModulus)));

        let negative = mod_pow(&signed(2), &signed(3), &signed(-7));
        assert!(matches!(negative, Err(RsaError::InvalidModulus)));

        // Modulus is reported before a negative operand
        let both = mod_pow(&signed(-2), &signed(3), &signed(0));
        assert!(matches!(both, Err(RsaError::InvalidModulus)));

        let unsigned = mod_pow_uint(&from_u64(2), &from_u64(3), &RsaBigInt::zero());
        assert!(matches!(unsigned, Err(RsaError::InvalidModulus)));
    }

    #[test]
    fn test_mod_pow_negative_arguments() {
        let base = mod_pow(&signed(-2), &signed(3), &signed(7));
        assert!(matches!(base, Err(RsaError::InvalidArgument(_))));

        let exp = mod_pow(&signed(2), &signed(-3), &signed(7));
        assert!(matches!(exp, Err(RsaError::InvalidArgument(_))));
    }

    #[test]
    fn test_mod_pow_no_overflow_large_modulus() {
        // (2^1279 - 1)(2^607 - 1), far beyond native integers
        let p = (RsaBigInt::one() << 1279usize) - 1u8;
        let q = (RsaBigInt::one() << 607usize) - 1u8;
        let n = &p * &q;
        let base = from_u64(65537);
        let exp = from_u64(65537);

        let result = mod_pow_uint(&base, &exp, &n).unwrap();
        assert_eq!(result, base.modpow(&exp, &n));
        assert!(result < n);

        let big_exp = &n - 2u8;
        let result = mod_pow_uint(&base, &big_exp, &n).unwrap();
        assert_eq!(result, base.modpow(&big_exp, &n));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let a = from_u64(3);
        let m = from_u64(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, from_u64(5));

        // Verify: 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!((a * inv) % m, from_u64(1));

        // Classroom key: 7 * 23 = 161 ≡ 1 (mod lcm(16, 10) = 80)
        assert_eq!(mod_inverse(&from_u64(7), &from_u64(80)), Some(from_u64(23)));
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert_eq!(mod_inverse(&from_u64(4), &from_u64(8)), None);
        assert_eq!(mod_inverse(&from_u64(3), &RsaBigInt::zero()), None);
    }

    #[test]
    fn test_extended_gcd() {
        let (g, x, y) = extended_gcd(&signed(240), &signed(46));
        assert_eq!(g, signed(2));
        assert_eq!(signed(240) * x + signed(46) * y, signed(2));
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(&from_u64(16), &from_u64(10)), from_u64(2));
        assert_eq!(lcm(&from_u64(16), &from_u64(10)), from_u64(80));
        assert_eq!(lcm(&from_u64(0), &from_u64(10)), from_u64(0));
    }

    #[test]
    fn test_byte_conversions() {
        let n = from_bytes(&[0x01, 0x00]);
        assert_eq!(n, from_u64(256));
        assert_eq!(to_bytes(&n), vec![0x01, 0x00]);
    }
}
