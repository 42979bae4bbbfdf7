// src/numeric.rs
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::mem;

use crate::directive::{MAX_BASE, MIN_BASE};

/// Characters accepted anywhere in a token as digit-group separators.
pub const SEPARATORS: [char; 2] = ['_', ','];

/// Parse a signed integer token in `base` (2..=36).
///
/// Separators are dropped first, then an optional `+`/`-` is accepted before
/// at least one ASCII digit of the base. Returns `None` for anything else,
/// including a base outside 2..=36.
pub fn parse_integer(token: &str, base: u32) -> Option<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return None;
    }
    let cleaned: String = token.chars().filter(|c| !SEPARATORS.contains(c)).collect();
    let (negative, digits) = match cleaned.as_bytes().first() {
        Some(b'-') => (true, &cleaned[1..]),
        Some(b'+') => (false, &cleaned[1..]),
        _ => (false, cleaned.as_str()),
    };
    if digits.is_empty() {
        return None;
    }

    let radix = BigInt::from(base);
    let mut value = BigInt::zero();
    for c in digits.chars() {
        // `to_digit` only knows ASCII digits and letters.
        let d = c.to_digit(base)?;
        value = value * &radix + d;
    }
    Some(if negative { -value } else { value })
}

/// Sum of every integer between `a` and `b` inclusive, in either order.
pub fn range_sum(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut low, mut high) = (a.clone(), b.clone());
    if low > high {
        mem::swap(&mut low, &mut high);
    }
    let count = &high - &low + BigInt::one();
    // count * (low + high) is always even.
    count * (low + high) / 2u32
}
