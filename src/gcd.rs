//! Greatest common divisors.

/// Returns the greatest common divisor of `a` and `b` with Euclid's algorithm.
///
/// The result is taken over the absolute values so it is never negative.
/// It is returned as a `u64` since `gcd(i64::MIN, 0)` is `2^63`, which does not fit
/// in an `i64`. `gcd(0, 0)` is `0`.
///
/// # Examples
///
/// ```
/// use partition_graphs::gcd;
///
/// assert!(gcd(10, 2) == 2);
/// assert!(gcd(-19 * 17, 1024 * 17) == 17);
/// assert!(gcd(i64::MIN, 0) == 1 << 63);
/// ```
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }

    a
}
