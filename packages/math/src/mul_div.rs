// SPDX-License-Identifier: MIT
// Floor multiply-divide over a 256-bit intermediate

use soroban_sdk::{Env, U256};

/// Convert a token amount to u128, rejecting negatives
#[inline]
pub fn i128_to_u128_checked(x: i128) -> Option<u128> {
    if x < 0 { None } else { Some(x as u128) }
}

/// Calculates floor((a * b) / denominator)
///
/// The product is formed in U256 so it cannot overflow. Returns `None`
/// when the denominator is zero or the quotient does not fit in u128.
pub fn mul_div_floor(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let den_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    product.div(&den_256).to_u128()
}
