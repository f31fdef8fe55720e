//! Input normalization and basis-point fees
//!
//! Callers hand amounts over as native integers, `BigInt`s or base-10 strings.
//! [`IntoAmount`] lifts all of them into `BigInt` before any arithmetic runs, and
//! the `require_*` helpers apply the sign preconditions shared by every operation.

use crate::error::{LyfMathError, Result};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Basis-point denominator: 10000 bps = 100%
pub const BPS_DIVISOR: u32 = 10_000;

/// Conversion of caller-supplied numbers into arbitrary-precision integers
pub trait IntoAmount {
    fn into_amount(self) -> Result<BigInt>;
}

impl IntoAmount for BigInt {
    fn into_amount(self) -> Result<BigInt> {
        Ok(self)
    }
}

impl IntoAmount for &BigInt {
    fn into_amount(self) -> Result<BigInt> {
        Ok(self.clone())
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<BigInt> {
        let trimmed = self.trim();
        trimmed
            .parse::<BigInt>()
            .map_err(|source| LyfMathError::UnparseableAmount {
                input: trimmed.to_string(),
                source,
            })
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<BigInt> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<BigInt> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for FeeBps {
    fn into_amount(self) -> Result<BigInt> {
        Ok(BigInt::from(self.0))
    }
}

macro_rules! impl_into_amount_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self) -> Result<BigInt> {
                    Ok(BigInt::from(self))
                }
            }
        )*
    };
}

impl_into_amount_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Swap fee in basis points, always within `[0, 10000]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeBps(u16);

impl FeeBps {
    pub const ZERO: FeeBps = FeeBps(0);
    pub const MAX: FeeBps = FeeBps(BPS_DIVISOR as u16);

    pub fn new(bps: u16) -> Result<Self> {
        if u32::from(bps) > BPS_DIVISOR {
            return Err(LyfMathError::invalid_input(
                "fee_bps",
                format!("fee must be within [0, {BPS_DIVISOR}] bps, got {bps}"),
            ));
        }
        Ok(Self(bps))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Share of the input that reaches the pool, `10000 - fee`
    pub fn complement(self) -> u32 {
        BPS_DIVISOR - u32::from(self.0)
    }

    /// Validates an arbitrary-precision fee for `operation`
    pub(crate) fn from_amount(operation: &'static str, fee: &BigInt) -> Result<Self> {
        if fee.is_negative() || *fee > BigInt::from(BPS_DIVISOR) {
            debug!(operation, %fee, "rejected fee outside basis-point range");
            return Err(LyfMathError::invalid_input(
                operation,
                format!("fee_bps must be within [0, {BPS_DIVISOR}], got {fee}"),
            ));
        }
        // Range-checked above, fits in u16
        let bps = fee.to_u16().ok_or_else(|| {
            LyfMathError::invalid_input(operation, format!("fee_bps {fee} does not fit in u16"))
        })?;
        Ok(Self(bps))
    }
}

impl fmt::Display for FeeBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

impl TryFrom<u16> for FeeBps {
    type Error = LyfMathError;

    fn try_from(bps: u16) -> Result<Self> {
        Self::new(bps)
    }
}

impl Serialize for FeeBps {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for FeeBps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bps = u16::deserialize(deserializer)?;
        FeeBps::new(bps).map_err(serde::de::Error::custom)
    }
}

/// Requires `value > 0`
pub(crate) fn require_positive(
    operation: &'static str,
    argument: &str,
    value: &BigInt,
) -> Result<()> {
    if value.is_positive() {
        return Ok(());
    }
    debug!(operation, argument, %value, "rejected non-positive argument");
    Err(LyfMathError::invalid_input(
        operation,
        format!("{argument} must be positive, got {value}"),
    ))
}

/// Requires `value >= 0`
pub(crate) fn require_non_negative(
    operation: &'static str,
    argument: &str,
    value: &BigInt,
) -> Result<()> {
    if !value.is_negative() {
        return Ok(());
    }
    debug!(operation, argument, %value, "rejected negative argument");
    Err(LyfMathError::invalid_input(
        operation,
        format!("{argument} must not be negative, got {value}"),
    ))
}

/// Requires a divisor that is not zero before it is used
pub(crate) fn require_nonzero_divisor(
    operation: &'static str,
    what: &str,
    divisor: &BigInt,
) -> Result<()> {
    if divisor.is_zero() {
        debug!(operation, what, "rejected zero divisor");
        return Err(LyfMathError::invalid_input(operation, format!("{what} is zero")));
    }
    Ok(())
}

/// Serde adapter storing `BigInt` as a decimal string
pub mod decimal_string {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse::<BigInt>()
            .map_err(|e| serde::de::Error::custom(format!("invalid integer {raw:?}: {e}")))
    }
}
