pub mod fast_exponentiation;
pub mod gcd;
pub mod matrix_multiplication;
pub mod sieve;
