//! Error reporting across the public surface
//!
//! Every precondition failure names the operation and the offending argument;
//! the internal orientation error of the deposit solver never escapes.

use lyf_math::{
    amount_to_swap, isqrt, optimal_deposit, position_value, shares_to_value, swap_return,
    value_to_shares, BigInt, LyfMathError,
};

fn assert_invalid(result: lyf_math::Result<BigInt>, operation: &str, needle: &str) {
    match result {
        Err(LyfMathError::InvalidInput {
            operation: op,
            reason,
        }) => {
            assert_eq!(op, operation);
            assert!(
                reason.contains(needle),
                "expected {:?} in reason {:?}",
                needle,
                reason
            );
        }
        other => panic!("expected InvalidInput from {}, got {:?}", operation, other),
    }
}

#[test]
fn test_negative_sqrt() {
    let err = isqrt(-16).unwrap_err();
    assert!(matches!(err, LyfMathError::NegativeInput { .. }));
    assert_eq!(err.to_string(), "Negative input: cannot take the square root of -16");
}

#[test]
fn test_swap_return_messages() {
    assert_invalid(swap_return(0, 10, 10, 30), "swap_return", "amount_in");
    assert_invalid(swap_return(1, 0, 10, 30), "swap_return", "reserve_in");
    assert_invalid(swap_return(1, 10, 0, 30), "swap_return", "reserve_out");
    assert_invalid(swap_return(1, 10, 10, 10_001), "swap_return", "fee_bps");
}

#[test]
fn test_amount_to_swap_messages() {
    assert_invalid(amount_to_swap(0, 10, 10, 30), "amount_to_swap", "amount_out");
    assert_invalid(
        amount_to_swap(10, 10, 10, 30),
        "amount_to_swap",
        "reserve_out - amount_out",
    );
    assert_invalid(amount_to_swap(1, 10, 10, 10_000), "amount_to_swap", "10000 - fee_bps");
}

#[test]
fn test_optimal_deposit_never_leaks_orientation_error() {
    for (amt_a, amt_b) in [(0u64, 1000u64), (1000, 0), (1, 1_000_000), (1_000_000, 1)] {
        let result = optimal_deposit(amt_a, amt_b, 5_000, 7_000, 30);
        assert!(
            !matches!(result, Err(LyfMathError::ReversedPrecondition)),
            "orientation error escaped for ({}, {})",
            amt_a,
            amt_b
        );
        assert!(result.is_ok());
    }
}

#[test]
fn test_optimal_deposit_messages() {
    let err = optimal_deposit(-1, 0, 10, 10, 30).unwrap_err();
    assert!(err.to_string().contains("amt_a must not be negative"));
    let err = optimal_deposit(1, 0, 10, 0, 30).unwrap_err();
    assert!(err.to_string().contains("res_b must be positive"));
}

#[test]
fn test_share_messages() {
    assert_invalid(shares_to_value(0, 1, 1), "shares_to_value", "shares");
    assert_invalid(value_to_shares(1, 1, 0), "value_to_shares", "total_value");
}

#[test]
fn test_position_messages() {
    assert_invalid(position_value(1, 0, 10, 10, 30), "position_value", "amount_farm");
}

#[test]
fn test_unparseable_string_argument() {
    let err = swap_return("100", "ten", "10", "30").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().starts_with("Unparseable amount \"ten\""));
}
