use proptest::prelude::*;

use reckon::{add, divide, gcd, is_prime, multiply, power, sqrt_approx, subtract, KernelError};

// Operands small enough that sums and products never wrap.
fn arb_small() -> impl Strategy<Value = i32> {
    -10_000i32..10_000
}

fn arb_nonneg() -> impl Strategy<Value = i32> {
    0i32..100_000
}

fn arb_any_nonneg() -> impl Strategy<Value = i32> {
    0i32..=i32::MAX
}

// ===== Arithmetic =====

proptest! {
    #[test]
    fn add_matches_operator(a in arb_small(), b in arb_small()) {
        prop_assert_eq!(add(a, b), a + b);
        prop_assert_eq!(add(a, b), add(b, a));
    }
}

proptest! {
    #[test]
    fn subtract_inverts_add(a in arb_small(), b in arb_small()) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }
}

proptest! {
    #[test]
    fn multiply_matches_operator(a in arb_small(), b in arb_small()) {
        prop_assert_eq!(multiply(a, b), a * b);
    }
}

proptest! {
    #[test]
    fn arithmetic_wraps_instead_of_panicking(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), a.wrapping_add(b));
        prop_assert_eq!(subtract(a, b), a.wrapping_sub(b));
        prop_assert_eq!(multiply(a, b), a.wrapping_mul(b));
    }
}

// ===== Division =====

proptest! {
    #[test]
    fn divide_by_zero_always_errors(a in any::<i32>()) {
        prop_assert_eq!(divide(a, 0), Err(KernelError::DivisionByZero));
    }
}

proptest! {
    #[test]
    fn divide_times_divisor(a in arb_small(), b in arb_small()) {
        prop_assume!(b != 0);
        let q = divide(a, b).unwrap();
        prop_assert!((q * f64::from(b) - f64::from(a)).abs() < 1e-9);
    }
}

// ===== Power =====

proptest! {
    #[test]
    fn zero_exponent_is_one(b in any::<i32>()) {
        prop_assert_eq!(power(b, 0), 1);
    }
}

proptest! {
    #[test]
    fn power_step(b in -10i32..10, e in 0u32..8) {
        prop_assert_eq!(power(b, e + 1), power(b, e) * b);
    }
}

proptest! {
    #[test]
    fn power_matches_pow(b in -10i32..10, e in 0u32..9) {
        prop_assert_eq!(power(b, e), b.pow(e));
    }
}

// ===== Square root =====

proptest! {
    #[test]
    fn sqrt_squares_back(n in arb_any_nonneg()) {
        let r = sqrt_approx(n).unwrap();
        prop_assert!((r * r - f64::from(n)).abs() <= 0.01, "sqrt_approx({}) = {}", n, r);
    }
}

proptest! {
    #[test]
    fn sqrt_negative_errors(n in i32::MIN..0) {
        prop_assert_eq!(sqrt_approx(n), Err(KernelError::NegativeSqrtInput));
    }
}

// ===== Primality =====

fn naive_is_prime(n: i32) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

proptest! {
    #[test]
    fn is_prime_matches_naive(n in -100i32..50_000) {
        prop_assert_eq!(is_prime(n), naive_is_prime(n));
    }
}

// ===== GCD =====

proptest! {
    #[test]
    fn gcd_divides_both(a in arb_nonneg(), b in arb_nonneg()) {
        let g = gcd(a, b);
        prop_assume!(g != 0);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }
}

proptest! {
    #[test]
    fn gcd_commutative(a in arb_nonneg(), b in arb_nonneg()) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }
}

proptest! {
    #[test]
    fn gcd_of_multiples(a in 1i32..1000, b in 1i32..1000, k in 1i32..100) {
        prop_assert_eq!(gcd(a * k, b * k), gcd(a, b) * k);
    }
}

// ===== Purity =====

proptest! {
    #[test]
    fn kernel_is_idempotent(a in arb_small(), b in arb_small(), e in 0u32..6) {
        prop_assert_eq!(add(a, b), add(a, b));
        prop_assert_eq!(subtract(a, b), subtract(a, b));
        prop_assert_eq!(multiply(a, b), multiply(a, b));
        prop_assert_eq!(divide(a, b), divide(a, b));
        prop_assert_eq!(power(a, e), power(a, e));
        prop_assert_eq!(sqrt_approx(a), sqrt_approx(a));
        prop_assert_eq!(is_prime(a), is_prime(a));
        prop_assert_eq!(gcd(a, b), gcd(a, b));
    }
}

#[test]
fn literal_results() {
    assert_eq!(power(2, 3), 8);
    assert_eq!(power(5, 4), 625);
    assert_eq!(power(10, 0), 1);
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(100, 25), 25);
    assert_eq!(gcd(17, 13), 1);
    assert_eq!(sqrt_approx(0), Ok(0.0));
}

#[test]
fn sqrt_large_inputs_converge_within_limit() {
    for n in [1_000_000_000, i32::MAX - 1, i32::MAX] {
        let r = sqrt_approx(n).unwrap();
        assert!((r * r - f64::from(n)).abs() <= 0.01, "sqrt_approx({n}) = {r}");
    }
}
