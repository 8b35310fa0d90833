// Basis-point fee arithmetic
//
// fee = floor(amount * fee_rate / FEE_DENOMINATOR)
//
// Must round down: the fee taken on-chain is never larger than the exact
// proportional share.

use soroban_sdk::Env;

use crate::constants::{FEE_DENOMINATOR, MAX_FEE_RATE};
use crate::mul_div::{i128_to_u128_checked, mul_div_floor};

/// Result of splitting an input amount into protocol fee and forwarded amount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    /// Amount kept by the protocol
    pub fee: i128,
    /// Amount forwarded to the exchange
    pub net: i128,
}

#[inline]
pub fn is_valid_fee_rate(fee_rate: u32) -> bool {
    fee_rate <= MAX_FEE_RATE
}

/// Protocol fee for `amount` at `fee_rate` basis points
///
/// Returns `None` for a negative amount or a rate above the denominator.
pub fn compute_fee(env: &Env, amount: i128, fee_rate: u32) -> Option<i128> {
    if !is_valid_fee_rate(fee_rate) {
        return None;
    }
    let amount = i128_to_u128_checked(amount)?;

    let fee = mul_div_floor(env, amount, fee_rate as u128, FEE_DENOMINATOR as u128)?;

    // fee <= amount <= i128::MAX
    i128::try_from(fee).ok()
}

/// Split `amount` into `(fee, net)` with `fee + net == amount`
pub fn split_fee(env: &Env, amount: i128, fee_rate: u32) -> Option<FeeSplit> {
    let fee = compute_fee(env, amount, fee_rate)?;
    Some(FeeSplit {
        fee,
        net: amount - fee,
    })
}
