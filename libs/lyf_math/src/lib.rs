//! # LYF Math - Exact Integer Math for Leveraged Yield Farming Pools
//!
//! ## Purpose
//!
//! Deterministic arbitrary-precision arithmetic for constant product (x*y=k) pools:
//! swap quotes in both directions, the balancing swap before a two-sided deposit,
//! share/value accounting and the liquidation value of a leveraged position.
//! Every result is an exact integer so off-chain accounting reproduces on-chain
//! numbers bit for bit.
//!
//! ## Integration Points
//!
//! - **Inputs**: caller-normalized integer amounts (`BigInt`, native integers or
//!   base-10 strings), fees in basis points (10000 = 100%)
//! - **Outputs**: `BigInt` amounts, [`DepositSwap`] for deposit planning
//! - **Pool snapshots**: [`PoolState`] loads from TOML/JSON with string-encoded reserves
//! - **Errors**: a single [`LyfMathError`] type, no panics on bad input
//!
//! ## Rounding Policy
//!
//! - Forward swap quotes round the output down
//! - Inverse quotes round the required input up (`+1`)
//! - Share conversions truncate in both directions
//! - No floating point anywhere
//!
//! ## Example
//!
//! ```rust
//! use lyf_math::{optimal_deposit, swap_return};
//!
//! let out = swap_return(100, 1000, 2000, 30).unwrap();
//! assert_eq!(out.to_string(), "181");
//!
//! let plan = optimal_deposit(1000, 0, 1_000_000, 1_000_000, 30).unwrap();
//! assert!(!plan.is_reversed);
//! assert_eq!(plan.swap_amount.to_string(), "500");
//! ```
//!
//! ## Performance Profile
//!
//! - Swap, share and position math: O(1) big-integer operations
//! - Optimal deposit: one integer square root, O(bits) multiplications
//! - Pure functions, no shared state, safe to call from any thread

pub mod amount;
pub mod deposit;
pub mod error;
pub mod pool;
pub mod position;
pub mod shares;
pub mod sqrt;
pub mod swap;

pub use amount::{FeeBps, IntoAmount, BPS_DIVISOR};
pub use deposit::{BalancedDeposit, DepositSolver, DepositSwap};
pub use error::{LyfMathError, Result};
pub use pool::{ConstantProductPool, PoolState, PoolToken, SwapDirection};
pub use position::PositionMath;
pub use shares::ShareMath;
pub use sqrt::isqrt;
pub use swap::SwapMath;

/// Arbitrary-precision integer used for every amount
pub use num_bigint::BigInt;

/// See [`SwapMath::swap_return`]
pub fn swap_return(
    amount_in: impl IntoAmount,
    reserve_in: impl IntoAmount,
    reserve_out: impl IntoAmount,
    fee_bps: impl IntoAmount,
) -> Result<BigInt> {
    SwapMath::swap_return(amount_in, reserve_in, reserve_out, fee_bps)
}

/// See [`SwapMath::amount_to_swap`]
pub fn amount_to_swap(
    amount_out: impl IntoAmount,
    reserve_in: impl IntoAmount,
    reserve_out: impl IntoAmount,
    fee_bps: impl IntoAmount,
) -> Result<BigInt> {
    SwapMath::amount_to_swap(amount_out, reserve_in, reserve_out, fee_bps)
}

/// See [`DepositSolver::optimal_deposit`]
pub fn optimal_deposit(
    amt_a: impl IntoAmount,
    amt_b: impl IntoAmount,
    res_a: impl IntoAmount,
    res_b: impl IntoAmount,
    fee_bps: impl IntoAmount,
) -> Result<DepositSwap> {
    DepositSolver::optimal_deposit(amt_a, amt_b, res_a, res_b, fee_bps)
}

/// See [`ShareMath::shares_to_value`]
pub fn shares_to_value(
    shares: impl IntoAmount,
    total_shares: impl IntoAmount,
    total_value: impl IntoAmount,
) -> Result<BigInt> {
    ShareMath::shares_to_value(shares, total_shares, total_value)
}

/// See [`ShareMath::value_to_shares`]
pub fn value_to_shares(
    value: impl IntoAmount,
    total_shares: impl IntoAmount,
    total_value: impl IntoAmount,
) -> Result<BigInt> {
    ShareMath::value_to_shares(value, total_shares, total_value)
}

/// See [`PositionMath::position_value`]
pub fn position_value(
    amount_base: impl IntoAmount,
    amount_farm: impl IntoAmount,
    reserve_base: impl IntoAmount,
    reserve_farm: impl IntoAmount,
    fee_bps: impl IntoAmount,
) -> Result<BigInt> {
    PositionMath::position_value(amount_base, amount_farm, reserve_base, reserve_farm, fee_bps)
}
