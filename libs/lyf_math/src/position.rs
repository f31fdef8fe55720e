//! Liquidation value of a leveraged farming position

use crate::amount::{require_positive, FeeBps, IntoAmount};
use crate::error::Result;
use crate::swap::SwapMath;
use num_bigint::BigInt;
use tracing::trace;

/// Position valuation against a constant product pool
pub struct PositionMath;

impl PositionMath {
    /// Base-token value of a position after selling all of its farm token
    ///
    /// The position's own holdings are carved out of the pool first, so the
    /// liquidation is priced against `reserve_farm - amount_farm` and
    /// `reserve_base - amount_base`:
    ///
    /// `amount_base + swap_return(amount_farm, reserve_farm - amount_farm, reserve_base - amount_base, fee_bps)`
    ///
    /// # Errors
    /// `InvalidInput` when any amount or reserve is not positive, the fee is out
    /// of range, or the position is as large as the pool side it sits in.
    pub fn position_value(
        amount_base: impl IntoAmount,
        amount_farm: impl IntoAmount,
        reserve_base: impl IntoAmount,
        reserve_farm: impl IntoAmount,
        fee_bps: impl IntoAmount,
    ) -> Result<BigInt> {
        let amount_base = amount_base.into_amount()?;
        let amount_farm = amount_farm.into_amount()?;
        let reserve_base = reserve_base.into_amount()?;
        let reserve_farm = reserve_farm.into_amount()?;
        let fee = FeeBps::from_amount("position_value", &fee_bps.into_amount()?)?;

        Self::position_value_exact(&amount_base, &amount_farm, &reserve_base, &reserve_farm, fee)
    }

    pub(crate) fn position_value_exact(
        amount_base: &BigInt,
        amount_farm: &BigInt,
        reserve_base: &BigInt,
        reserve_farm: &BigInt,
        fee: FeeBps,
    ) -> Result<BigInt> {
        const OP: &str = "position_value";
        require_positive(OP, "amount_base", amount_base)?;
        require_positive(OP, "amount_farm", amount_farm)?;
        require_positive(OP, "reserve_base", reserve_base)?;
        require_positive(OP, "reserve_farm", reserve_farm)?;

        // Price the liquidation against the pool without the position in it
        let remaining_farm = reserve_farm - amount_farm;
        let remaining_base = reserve_base - amount_base;
        require_positive(OP, "reserve_farm - amount_farm", &remaining_farm)?;
        require_positive(OP, "reserve_base - amount_base", &remaining_base)?;

        let liquidated =
            SwapMath::swap_return_exact(amount_farm, &remaining_farm, &remaining_base, fee)?;
        let value = amount_base + liquidated;
        trace!(%amount_base, %amount_farm, %reserve_base, %reserve_farm, %fee, %value, "position value");
        Ok(value)
    }
}
