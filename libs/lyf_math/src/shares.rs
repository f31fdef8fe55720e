//! Conversion between pool shares and the value they represent
//!
//! Until the first share is issued (`total_shares == 0`) one share is worth
//! exactly one unit of value. Both directions truncate, so converting there and
//! back may lose up to one unit.

use crate::amount::{require_non_negative, require_nonzero_divisor, require_positive, IntoAmount};
use crate::error::Result;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::trace;

/// Share accounting helpers
pub struct ShareMath;

impl ShareMath {
    /// Value owned by `shares`: `floor(shares * total_value / total_shares)`
    pub fn shares_to_value(
        shares: impl IntoAmount,
        total_shares: impl IntoAmount,
        total_value: impl IntoAmount,
    ) -> Result<BigInt> {
        const OP: &str = "shares_to_value";
        let shares = shares.into_amount()?;
        let total_shares = total_shares.into_amount()?;
        let total_value = total_value.into_amount()?;
        require_positive(OP, "shares", &shares)?;
        require_non_negative(OP, "total_shares", &total_shares)?;
        require_non_negative(OP, "total_value", &total_value)?;

        if total_shares.is_zero() {
            return Ok(shares);
        }
        let value = &shares * total_value / &total_shares;
        trace!(%shares, %total_shares, %value, "shares to value");
        Ok(value)
    }

    /// Shares worth `value`: `floor(value * total_shares / total_value)`
    ///
    /// A pool with issued shares but zero total value cannot price new shares
    /// and is rejected as invalid input.
    pub fn value_to_shares(
        value: impl IntoAmount,
        total_shares: impl IntoAmount,
        total_value: impl IntoAmount,
    ) -> Result<BigInt> {
        const OP: &str = "value_to_shares";
        let value = value.into_amount()?;
        let total_shares = total_shares.into_amount()?;
        let total_value = total_value.into_amount()?;
        require_positive(OP, "value", &value)?;
        require_non_negative(OP, "total_shares", &total_shares)?;
        require_non_negative(OP, "total_value", &total_value)?;

        if total_shares.is_zero() {
            return Ok(value);
        }
        require_nonzero_divisor(OP, "total_value", &total_value)?;
        let shares = &value * total_shares / &total_value;
        trace!(%value, %total_value, %shares, "value to shares");
        Ok(shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_is_identity() {
        assert_eq!(ShareMath::shares_to_value(77, 0, 12345).unwrap(), BigInt::from(77));
        assert_eq!(ShareMath::value_to_shares(77, 0, 12345).unwrap(), BigInt::from(77));
        assert_eq!(ShareMath::value_to_shares(77, 0, 0).unwrap(), BigInt::from(77));
    }

    #[test]
    fn test_proportional_conversion() {
        assert_eq!(ShareMath::shares_to_value(10, 100, 250).unwrap(), BigInt::from(25));
        assert_eq!(ShareMath::value_to_shares(25, 100, 250).unwrap(), BigInt::from(10));
    }

    #[test]
    fn test_truncation() {
        // 1 * 10 / 3
        assert_eq!(ShareMath::shares_to_value(1, 3, 10).unwrap(), BigInt::from(3));
        // 3 * 3 / 10
        assert_eq!(ShareMath::value_to_shares(3, 3, 10).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_zero_total_value_with_shares() {
        assert_eq!(ShareMath::shares_to_value(5, 100, 0).unwrap(), BigInt::from(0));
        assert!(ShareMath::value_to_shares(5, 100, 0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(ShareMath::shares_to_value(0, 100, 100).is_err());
        assert!(ShareMath::shares_to_value(1, -1, 100).is_err());
        assert!(ShareMath::shares_to_value(1, 100, -1).is_err());
        assert!(ShareMath::value_to_shares(0, 100, 100).is_err());
        assert!(ShareMath::value_to_shares(-3, 0, 100).is_err());
        assert!(ShareMath::value_to_shares(1, -1, 100).is_err());
    }
}
