//! Pool snapshots and the unified constant product pool interface
//!
//! `PoolState` captures two reserves and a fee, and can be loaded from TOML or
//! JSON with reserves written as decimal strings (they routinely exceed the
//! integer range of either format):
//!
//! ```toml
//! reserve_a = "1299997000000000000000000000000"
//! reserve_b = "1000000000000000000000000000000000"
//! fee_bps = 111
//! ```

use crate::amount::{decimal_string, require_positive, FeeBps, IntoAmount};
use crate::deposit::{DepositSolver, DepositSwap};
use crate::error::{LyfMathError, Result};
use crate::position::PositionMath;
use crate::swap::SwapMath;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which way a swap crosses the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// Token A in, token B out
    AToB,
    /// Token B in, token A out
    BToA,
}

impl SwapDirection {
    pub fn reversed(self) -> Self {
        match self {
            SwapDirection::AToB => SwapDirection::BToA,
            SwapDirection::BToA => SwapDirection::AToB,
        }
    }
}

/// One side of a two-token pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolToken {
    A,
    B,
}

/// Unified interface over a two-reserve constant product pool
pub trait ConstantProductPool {
    /// Current reserves as `(reserve_a, reserve_b)`
    fn reserves(&self) -> (&BigInt, &BigInt);

    /// Swap fee
    fn fee_bps(&self) -> FeeBps;

    /// Reserves ordered `(reserve_in, reserve_out)` for a swap direction
    fn oriented_reserves(&self, direction: SwapDirection) -> (&BigInt, &BigInt) {
        let (a, b) = self.reserves();
        match direction {
            SwapDirection::AToB => (a, b),
            SwapDirection::BToA => (b, a),
        }
    }

    /// Output for swapping `amount_in` in the given direction
    fn amount_out(&self, amount_in: &BigInt, direction: SwapDirection) -> Result<BigInt> {
        let (reserve_in, reserve_out) = self.oriented_reserves(direction);
        SwapMath::swap_return_exact(amount_in, reserve_in, reserve_out, self.fee_bps())
    }

    /// Input required to receive at least `amount_out` in the given direction
    fn amount_in(&self, amount_out: &BigInt, direction: SwapDirection) -> Result<BigInt> {
        let (reserve_in, reserve_out) = self.oriented_reserves(direction);
        SwapMath::amount_to_swap_exact(amount_out, reserve_in, reserve_out, self.fee_bps())
    }
}

/// Reserves and fee of a constant product pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoolStateRepr")]
pub struct PoolState {
    #[serde(with = "decimal_string")]
    pub reserve_a: BigInt,
    #[serde(with = "decimal_string")]
    pub reserve_b: BigInt,
    pub fee_bps: FeeBps,
}

#[derive(Deserialize)]
struct PoolStateRepr {
    #[serde(with = "decimal_string")]
    reserve_a: BigInt,
    #[serde(with = "decimal_string")]
    reserve_b: BigInt,
    fee_bps: FeeBps,
}

impl TryFrom<PoolStateRepr> for PoolState {
    type Error = LyfMathError;

    fn try_from(repr: PoolStateRepr) -> Result<Self> {
        Self::validated(repr.reserve_a, repr.reserve_b, repr.fee_bps)
    }
}

impl PoolState {
    /// Builds a pool snapshot, rejecting non-positive reserves and bad fees
    pub fn new(
        reserve_a: impl IntoAmount,
        reserve_b: impl IntoAmount,
        fee_bps: impl IntoAmount,
    ) -> Result<Self> {
        let reserve_a = reserve_a.into_amount()?;
        let reserve_b = reserve_b.into_amount()?;
        let fee = FeeBps::from_amount("PoolState::new", &fee_bps.into_amount()?)?;
        Self::validated(reserve_a, reserve_b, fee)
    }

    fn validated(reserve_a: BigInt, reserve_b: BigInt, fee_bps: FeeBps) -> Result<Self> {
        require_positive("PoolState", "reserve_a", &reserve_a)?;
        require_positive("PoolState", "reserve_b", &reserve_b)?;
        Ok(Self {
            reserve_a,
            reserve_b,
            fee_bps,
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| {
            debug!(error = %e, "failed to parse pool snapshot from TOML");
            LyfMathError::invalid_input("PoolState::from_toml_str", e.to_string())
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            debug!(error = %e, "failed to parse pool snapshot from JSON");
            LyfMathError::invalid_input("PoolState::from_json_str", e.to_string())
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| LyfMathError::invalid_input("PoolState::to_json_string", e.to_string()))
    }

    /// Pool state after `amount_in` is swapped in the given direction
    ///
    /// The input side grows by the full `amount_in` (fee included) and the output
    /// side shrinks by the quoted output.
    pub fn after_swap(&self, amount_in: &BigInt, direction: SwapDirection) -> Result<Self> {
        let amount_out = self.amount_out(amount_in, direction)?;
        let (reserve_a, reserve_b) = match direction {
            SwapDirection::AToB => (&self.reserve_a + amount_in, &self.reserve_b - &amount_out),
            SwapDirection::BToA => (&self.reserve_a - &amount_out, &self.reserve_b + amount_in),
        };
        Ok(Self {
            reserve_a,
            reserve_b,
            fee_bps: self.fee_bps,
        })
    }

    /// Balancing swap for depositing `amount_a` and `amount_b` into this pool
    pub fn optimal_deposit(
        &self,
        amount_a: impl IntoAmount,
        amount_b: impl IntoAmount,
    ) -> Result<DepositSwap> {
        DepositSolver::optimal_deposit_exact(
            &amount_a.into_amount()?,
            &amount_b.into_amount()?,
            &self.reserve_a,
            &self.reserve_b,
            self.fee_bps,
        )
    }

    /// Liquidation value, in the `base` token, of a position held in this pool
    pub fn position_value(
        &self,
        amount_base: impl IntoAmount,
        amount_farm: impl IntoAmount,
        base: PoolToken,
    ) -> Result<BigInt> {
        let (reserve_base, reserve_farm) = match base {
            PoolToken::A => (&self.reserve_a, &self.reserve_b),
            PoolToken::B => (&self.reserve_b, &self.reserve_a),
        };
        PositionMath::position_value_exact(
            &amount_base.into_amount()?,
            &amount_farm.into_amount()?,
            reserve_base,
            reserve_farm,
            self.fee_bps,
        )
    }
}

impl ConstantProductPool for PoolState {
    fn reserves(&self) -> (&BigInt, &BigInt) {
        (&self.reserve_a, &self.reserve_b)
    }

    fn fee_bps(&self) -> FeeBps {
        self.fee_bps
    }
}
