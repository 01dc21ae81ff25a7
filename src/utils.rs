/// Check if `n` is a prime number.
///
/// Uses trial division over the 6k±1 wheel: after ruling out 2 and 3,
/// only candidates `i` and `i + 2` for `i = 5, 11, 17, …` up to `√n` are
/// tried. Values `<= 1`, negatives included, are not prime.
pub const fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // Widened so `i * i` cannot overflow near i32::MAX.
    let n = n as i64;
    let mut i: i64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until `b == 0` and
/// returns `a`. For non-negative inputs this is the usual gcd, with
/// `gcd(0, 0) == 0`. With negative inputs the remainder truncates toward
/// zero, so the sign of the result follows the last non-zero remainder
/// (`gcd(-48, 18) == 6`, `gcd(48, -18) == -6`); do not rely on it.
pub const fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}
