//! The fixed demonstration sequence.

use std::io::{self, Write};

use crate::arith::{add, divide, multiply, power, subtract};
use crate::report::Reporter;
use crate::sqrt::{sqrt_approx_with, NewtonParams};
use crate::utils::{gcd, is_prime};

pub const TITLE: &str = "=== Advanced Calculator ===";
pub const DONE: &str = "Calculator operations completed!";

/// Upper bound (inclusive) of the primality scan starting at 2.
pub const PRIME_SCAN_LIMIT: i32 = 17;

/// Run every section in order, writing to `r`.
///
/// Domain errors are reported inline and replaced by the sentinel; only
/// write failures on the underlying sink are returned.
pub fn run<W: Write>(r: &mut Reporter<W>, newton: &NewtonParams) -> io::Result<()> {
    r.line(TITLE)?;
    r.blank()?;

    basic_arithmetic(r)?;
    powers(r)?;
    square_roots(r, newton)?;
    primes(r)?;
    divisors(r)?;
    complex(r)?;

    r.line(DONE)?;
    r.flush()
}

fn basic_arithmetic<W: Write>(r: &mut Reporter<W>) -> io::Result<()> {
    let num1 = 15;
    let num2 = 4;

    r.header("Basic Arithmetic:")?;
    r.int("First number", num1)?;
    r.int("Second number", num2)?;
    r.blank()?;

    r.int("Addition", add(num1, num2))?;
    r.int("Subtraction", subtract(num1, num2))?;
    r.int("Multiplication", multiply(num1, num2))?;
    let quotient = r.recover(divide(num1, num2))?;
    r.float("Division", quotient)?;
    r.blank()
}

fn powers<W: Write>(r: &mut Reporter<W>) -> io::Result<()> {
    r.header("Power Calculations:")?;
    r.int("2^3", power(2, 3))?;
    r.int("5^4", power(5, 4))?;
    r.int("10^0", power(10, 0))?;
    r.blank()
}

fn square_roots<W: Write>(r: &mut Reporter<W>, newton: &NewtonParams) -> io::Result<()> {
    r.header("Square Root Approximations:")?;
    for n in [16, 25, 10] {
        let root = r.recover(sqrt_approx_with(n, newton))?;
        r.float(&format!("sqrt({n})"), root)?;
    }
    r.blank()
}

fn primes<W: Write>(r: &mut Reporter<W>) -> io::Result<()> {
    r.header("Prime Number Checking:")?;
    for i in (2..=PRIME_SCAN_LIMIT).filter(|&i| is_prime(i)) {
        r.line(&format!("{i} is prime"))?;
    }
    r.blank()
}

fn divisors<W: Write>(r: &mut Reporter<W>) -> io::Result<()> {
    r.header("Greatest Common Divisor:")?;
    for (a, b) in [(48, 18), (100, 25), (17, 13)] {
        r.int(&format!("GCD({a}, {b})"), gcd(a, b))?;
    }
    r.blank()
}

fn complex<W: Write>(r: &mut Reporter<W>) -> io::Result<()> {
    let a = 12;
    let b = 8;
    let c = 5;

    r.header("Complex Calculations:")?;

    // The halved term is truncated to an integer before the sum.
    let half = r.recover(divide(c, 2))? as i32;
    r.equation("(12 * 8) + (5 / 2) = ", add(multiply(a, b), half))?;

    // Integer stand-in for π·r², with 3 * 14 in place of π.
    let area = multiply(multiply(3, 14), multiply(5, 5));
    r.equation("Approximate area of circle (r=5): ", area)?;
    r.blank()
}
