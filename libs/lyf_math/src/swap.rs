//! Constant product (x*y=k) swap quotes with a proportional input fee
//!
//! Both directions round in the pool's favour: forward quotes round the output
//! down, inverse quotes round the required input up.

use crate::amount::{require_nonzero_divisor, require_positive, FeeBps, IntoAmount, BPS_DIVISOR};
use crate::error::Result;
use num_bigint::BigInt;
use tracing::trace;

/// Fee-adjusted constant product swap math
pub struct SwapMath;

impl SwapMath {
    /// Output amount returned for swapping `amount_in` into the pool
    ///
    /// # Arguments
    /// * `amount_in` - Input token amount, must be positive
    /// * `reserve_in` - Input token reserve, must be positive
    /// * `reserve_out` - Output token reserve, must be positive
    /// * `fee_bps` - Fee in basis points (30 = 0.3%), within `[0, 10000]`
    ///
    /// # Returns
    /// `floor(net * reserve_out / (10000 * reserve_in + net))` where
    /// `net = amount_in * (10000 - fee_bps)`
    pub fn swap_return(
        amount_in: impl IntoAmount,
        reserve_in: impl IntoAmount,
        reserve_out: impl IntoAmount,
        fee_bps: impl IntoAmount,
    ) -> Result<BigInt> {
        const OP: &str = "swap_return";
        let amount_in = amount_in.into_amount()?;
        let reserve_in = reserve_in.into_amount()?;
        let reserve_out = reserve_out.into_amount()?;
        let fee = FeeBps::from_amount(OP, &fee_bps.into_amount()?)?;

        Self::swap_return_exact(&amount_in, &reserve_in, &reserve_out, fee)
    }

    /// Input amount that yields at least `amount_out` when swapped
    ///
    /// Requires `0 < amount_out < reserve_out`. The result is
    /// `floor(floor(amount_out * 10000 * reserve_in / (reserve_out - amount_out)) / (10000 - fee_bps)) + 1`,
    /// so feeding it back into [`SwapMath::swap_return`] never falls short.
    pub fn amount_to_swap(
        amount_out: impl IntoAmount,
        reserve_in: impl IntoAmount,
        reserve_out: impl IntoAmount,
        fee_bps: impl IntoAmount,
    ) -> Result<BigInt> {
        const OP: &str = "amount_to_swap";
        let amount_out = amount_out.into_amount()?;
        let reserve_in = reserve_in.into_amount()?;
        let reserve_out = reserve_out.into_amount()?;
        let fee = FeeBps::from_amount(OP, &fee_bps.into_amount()?)?;

        Self::amount_to_swap_exact(&amount_out, &reserve_in, &reserve_out, fee)
    }

    pub(crate) fn swap_return_exact(
        amount_in: &BigInt,
        reserve_in: &BigInt,
        reserve_out: &BigInt,
        fee: FeeBps,
    ) -> Result<BigInt> {
        const OP: &str = "swap_return";
        require_positive(OP, "reserve_in", reserve_in)?;
        require_positive(OP, "reserve_out", reserve_out)?;
        require_positive(OP, "amount_in", amount_in)?;

        let amount_with_fee = amount_in * fee.complement();
        let numerator = &amount_with_fee * reserve_out;
        let denominator = reserve_in * BPS_DIVISOR + &amount_with_fee;
        require_nonzero_divisor(OP, "10000 * reserve_in + amount_with_fee", &denominator)?;

        let amount_out = numerator / denominator;
        trace!(
            %amount_in, %reserve_in, %reserve_out, %fee, %amount_out,
            "constant product swap quote"
        );
        Ok(amount_out)
    }

    pub(crate) fn amount_to_swap_exact(
        amount_out: &BigInt,
        reserve_in: &BigInt,
        reserve_out: &BigInt,
        fee: FeeBps,
    ) -> Result<BigInt> {
        const OP: &str = "amount_to_swap";
        require_positive(OP, "reserve_in", reserve_in)?;
        require_positive(OP, "reserve_out", reserve_out)?;
        require_positive(OP, "amount_out", amount_out)?;

        // Pool cannot pay out its whole reserve
        let remaining_out = reserve_out - amount_out;
        require_positive(OP, "reserve_out - amount_out", &remaining_out)?;

        let fee_complement = BigInt::from(fee.complement());
        require_nonzero_divisor(OP, "10000 - fee_bps", &fee_complement)?;

        let amount_with_fee = amount_out * BPS_DIVISOR * reserve_in / remaining_out;
        let amount_in = amount_with_fee / fee_complement + 1u32;
        trace!(
            %amount_out, %reserve_in, %reserve_out, %fee, %amount_in,
            "constant product inverse quote"
        );
        Ok(amount_in)
    }
}
