//! Optimal single-sided swap before a two-sided liquidity deposit
//!
//! Given deposit amounts that do not match the pool ratio, finds how much of the
//! excess token to swap so the leftovers line up with the post-swap reserves.
//! Requiring `(res_a + s) / (amt_a - s) == (res_b - out(s)) / (amt_b + out(s))`
//! with the fee-adjusted output `out(s)` reduces to a quadratic in `s`:
//!
//! ```text
//! a = 10000 - fee
//! b = (2 * 10000 - fee) * res_a
//! c = (amt_a * res_b - amt_b * res_a) * 10000 / (amt_b + res_b) * res_a
//! s = (isqrt(b^2 + 4ac) - b) / 2a
//! ```

use crate::amount::{
    require_non_negative, require_nonzero_divisor, require_positive, FeeBps, IntoAmount,
    BPS_DIVISOR,
};
use crate::error::{LyfMathError, Result};
use crate::pool::{ConstantProductPool, PoolState, SwapDirection};
use crate::sqrt::isqrt_non_negative;
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Swap that balances a deposit against the pool ratio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositSwap {
    /// Amount of the excess token to swap
    #[serde(with = "crate::amount::decimal_string")]
    pub swap_amount: BigInt,
    /// `false`: swap token A for token B. `true`: swap token B for token A
    pub is_reversed: bool,
}

/// Deposit amounts and pool reserves after the balancing swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedDeposit {
    pub amount_a: BigInt,
    pub amount_b: BigInt,
    pub pool: PoolState,
}

impl DepositSwap {
    pub fn direction(&self) -> SwapDirection {
        if self.is_reversed {
            SwapDirection::BToA
        } else {
            SwapDirection::AToB
        }
    }

    /// Executes the swap against `pool` and returns what is left to deposit
    ///
    /// A zero `swap_amount` leaves both the amounts and the pool untouched.
    pub fn apply(
        &self,
        amount_a: impl IntoAmount,
        amount_b: impl IntoAmount,
        pool: &PoolState,
    ) -> Result<BalancedDeposit> {
        const OP: &str = "DepositSwap::apply";
        let amount_a = amount_a.into_amount()?;
        let amount_b = amount_b.into_amount()?;

        if self.swap_amount.is_zero() {
            return Ok(BalancedDeposit {
                amount_a,
                amount_b,
                pool: pool.clone(),
            });
        }

        let direction = self.direction();
        let (held_in, held_out) = match direction {
            SwapDirection::AToB => (&amount_a, &amount_b),
            SwapDirection::BToA => (&amount_b, &amount_a),
        };
        if self.swap_amount > *held_in {
            return Err(LyfMathError::invalid_input(
                OP,
                format!(
                    "swap_amount {} exceeds the deposited {} of the input token",
                    self.swap_amount, held_in
                ),
            ));
        }

        let received = pool.amount_out(&self.swap_amount, direction)?;
        let remaining_in = held_in - &self.swap_amount;
        let grown_out = held_out + &received;
        let pool = pool.after_swap(&self.swap_amount, direction)?;

        let (amount_a, amount_b) = match direction {
            SwapDirection::AToB => (remaining_in, grown_out),
            SwapDirection::BToA => (grown_out, remaining_in),
        };
        Ok(BalancedDeposit {
            amount_a,
            amount_b,
            pool,
        })
    }
}

/// Solver for the balancing swap of a two-sided deposit
pub struct DepositSolver;

impl DepositSolver {
    /// Amount and direction of the swap that matches a deposit to the pool ratio
    ///
    /// `is_reversed` is set when `amt_a * res_b < amt_b * res_a`, i.e. token B is
    /// the excess side and must be swapped for token A. A deposit that already
    /// matches the ratio yields `{ swap_amount: 0, is_reversed: false }`.
    ///
    /// # Errors
    /// `InvalidInput` for negative amounts, non-positive reserves, a fee outside
    /// `[0, 10000]`, or a 100% fee on an unbalanced deposit (the quadratic
    /// degenerates).
    pub fn optimal_deposit(
        amt_a: impl IntoAmount,
        amt_b: impl IntoAmount,
        res_a: impl IntoAmount,
        res_b: impl IntoAmount,
        fee_bps: impl IntoAmount,
    ) -> Result<DepositSwap> {
        const OP: &str = "optimal_deposit";
        let amt_a = amt_a.into_amount()?;
        let amt_b = amt_b.into_amount()?;
        let res_a = res_a.into_amount()?;
        let res_b = res_b.into_amount()?;
        let fee = FeeBps::from_amount(OP, &fee_bps.into_amount()?)?;

        Self::optimal_deposit_exact(&amt_a, &amt_b, &res_a, &res_b, fee)
    }

    pub(crate) fn optimal_deposit_exact(
        amt_a: &BigInt,
        amt_b: &BigInt,
        res_a: &BigInt,
        res_b: &BigInt,
        fee: FeeBps,
    ) -> Result<DepositSwap> {
        const OP: &str = "optimal_deposit";
        require_non_negative(OP, "amt_a", amt_a)?;
        require_non_negative(OP, "amt_b", amt_b)?;
        require_positive(OP, "res_a", res_a)?;
        require_positive(OP, "res_b", res_b)?;

        let cross_a = amt_a * res_b;
        let cross_b = amt_b * res_a;
        if cross_a == cross_b {
            trace!(%amt_a, %amt_b, %res_a, %res_b, "deposit already matches pool ratio");
            return Ok(DepositSwap {
                swap_amount: BigInt::zero(),
                is_reversed: false,
            });
        }

        let is_reversed = cross_a < cross_b;
        debug!(is_reversed, %fee, "optimal deposit direction");

        let swap_amount = if is_reversed {
            Self::solve_excess_a(amt_b, amt_a, res_b, res_a, fee)?
        } else {
            Self::solve_excess_a(amt_a, amt_b, res_a, res_b, fee)?
        };
        trace!(%amt_a, %amt_b, %res_a, %res_b, %swap_amount, is_reversed, "optimal deposit");

        Ok(DepositSwap {
            swap_amount,
            is_reversed,
        })
    }

    /// Solves the quadratic with token A as the excess side
    fn solve_excess_a(
        amt_a: &BigInt,
        amt_b: &BigInt,
        res_a: &BigInt,
        res_b: &BigInt,
        fee: FeeBps,
    ) -> Result<BigInt> {
        const OP: &str = "optimal_deposit";
        let cross_a = amt_a * res_b;
        let cross_b = amt_b * res_a;
        if cross_a < cross_b {
            return Err(LyfMathError::ReversedPrecondition);
        }

        let a = BigInt::from(fee.complement());
        let b = BigInt::from(2 * BPS_DIVISOR - u32::from(fee.get())) * res_a;

        let c_divisor = amt_b + res_b;
        require_nonzero_divisor(OP, "amt_b + res_b", &c_divisor)?;
        let c = (cross_a - cross_b) * BPS_DIVISOR / c_divisor * res_a;

        let d = &a * &c * 4u32;
        let root = isqrt_non_negative(&(&b * &b + d));

        let denominator = &a * 2u32;
        require_nonzero_divisor(OP, "2 * (10000 - fee_bps)", &denominator)?;
        Ok((root - b) / denominator)
    }
}
