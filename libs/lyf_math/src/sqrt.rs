//! Integer square root over arbitrary-precision integers
//!
//! Binary-digit doubling: `isqrt(n)` is either `2 * isqrt(n >> 2)` or one more
//! than that. Rather than recursing once per pair of bits, the levels are
//! walked bottom-up so stack depth stays constant for any operand size.

use crate::amount::IntoAmount;
use crate::error::{LyfMathError, Result};
use num_bigint::BigInt;
use num_traits::Signed;

/// Exact `floor(sqrt(n))` for `n >= 0`
///
/// # Errors
/// [`LyfMathError::NegativeInput`] when `n < 0`, or a parse error for a
/// non-numeric string argument.
pub fn isqrt(n: impl IntoAmount) -> Result<BigInt> {
    let n = n.into_amount()?;
    if n.is_negative() {
        return Err(LyfMathError::negative_input(n));
    }
    Ok(isqrt_non_negative(&n))
}

/// Square root of a value already known to be non-negative
pub(crate) fn isqrt_non_negative(n: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    if *n < two {
        return n.clone();
    }

    // Number of two-bit levels until the shifted operand drops below 2
    let levels = (n.bits() / 2) as usize;

    // Base case value at the deepest level is 0 or 1
    let mut root: BigInt = n >> (2 * levels);
    for level in (0..levels).rev() {
        let target: BigInt = n >> (2 * level);
        let small: BigInt = &root << 1usize;
        let large = &small + 1;
        root = if &large * &large > target { small } else { large };
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_floor_root(n: &BigInt) {
        let r = isqrt(n).unwrap();
        assert!(&r * &r <= *n, "root {} too large for {}", r, n);
        let next = &r + 1;
        assert!(&next * &next > *n, "root {} too small for {}", r, n);
    }

    #[test]
    fn test_small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u64).unwrap(), BigInt::from(*root), "isqrt({})", n);
        }
    }

    #[test]
    fn test_perfect_squares_and_neighbours() {
        for k in [2u64, 3, 10, 255, 256, 65_535, 1 << 31, 4_294_967_295] {
            let sq = BigInt::from(k) * BigInt::from(k);
            assert_eq!(isqrt(&sq).unwrap(), BigInt::from(k));
            assert_eq!(isqrt(&sq - 1).unwrap(), BigInt::from(k - 1));
            assert_eq!(isqrt(&sq + 1).unwrap(), BigInt::from(k));
        }
    }

    #[test]
    fn test_very_large_operand() {
        // 10^300 has an exact root of 10^150
        let n = BigInt::from(10).pow(300);
        assert_eq!(isqrt(&n).unwrap(), BigInt::from(10).pow(150));

        let odd: BigInt = (BigInt::from(1) << 4099) + 12345;
        assert_floor_root(&odd);
    }

    #[test]
    fn test_negative_rejected() {
        let err = isqrt(-1i64).unwrap_err();
        assert_eq!(err, LyfMathError::negative_input(BigInt::from(-1)));
    }

    #[test]
    fn test_string_operand() {
        assert_eq!(isqrt("144").unwrap(), BigInt::from(12));
        assert!(isqrt("not a number").unwrap_err().is_invalid_input());
    }
}
