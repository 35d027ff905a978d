//! Binary exponentiation: square the base, halve the exponent.

/// base^exp, wrapping modulo 2^64 on overflow (matching u64::wrapping_pow).
/// Use fast_pow_mod when the true value matters for large exponents.
pub fn fast_pow(mut base: u64, mut exp: u64) -> u64 {
    let mut result: u64 = 1;
    while exp > 0 {
        if exp % 2 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp /= 2;
    }
    result
}

/// base^exp mod m. Intermediate products are widened to u128, so any
/// non-zero u64 modulus is safe.
pub fn fast_pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    let m = m as u128;
    let mut base = base as u128 % m;
    let mut result = 1u128;
    while exp > 0 {
        if exp % 2 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp /= 2;
    }
    result as u64
}
