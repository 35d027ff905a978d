//! Sieve of Eratosthenes.
//!
//! Marks multiples starting from i*i; smaller multiples were already
//! struck by smaller primes. O(n log log n).

pub fn sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= n {
        if is_prime[i] {
            for j in (i * i..=n).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| if p { Some(i) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sieve;

    #[test]
    fn primes_up_to_thirty() {
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn tiny_bounds() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
        assert_eq!(sieve(2), vec![2]);
    }

    #[test]
    fn count_below_thousand() {
        assert_eq!(sieve(1000).len(), 168);
    }
}
