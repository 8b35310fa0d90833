//! Parameter validation for admin and swap entry points

use soroban_sdk::{Address, Env, String, Vec};

use crate::error::RouterError;
use crate::types::SwapData;

/// All-zero ed25519 account, used wherever the ledger needs a "zero address"
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn require_non_zero(env: &Env, address: &Address) -> Result<(), RouterError> {
    if address == &zero_account(env) {
        return Err(RouterError::InvalidParameter);
    }
    Ok(())
}

/// Check the shape of an exact input swap request
///
/// - path has at least two tokens, no token repeats back to back and the
///   output token differs from the input token
/// - every version tag is non-empty and covers at least one hop
/// - version hop counts add up to `path.len() - 1`
/// - one fee tier per hop, or one per path token
/// - positive input, non-negative output floor, non-zero recipient
pub fn validate_swap_request(
    env: &Env,
    path: &Vec<Address>,
    pool_versions: &Vec<String>,
    version_len: &Vec<u32>,
    fees: &Vec<u32>,
    data: &SwapData,
) -> Result<(), RouterError> {
    if path.len() < 2 {
        return Err(RouterError::InvalidParameter);
    }
    let hops = path.len() - 1;

    let mut prev: Option<Address> = None;
    for token in path.iter() {
        if prev.as_ref() == Some(&token) {
            return Err(RouterError::InvalidParameter);
        }
        prev = Some(token);
    }
    if path.first() == path.last() {
        return Err(RouterError::InvalidParameter);
    }

    if pool_versions.is_empty() || pool_versions.len() != version_len.len() {
        return Err(RouterError::InvalidParameter);
    }
    for version in pool_versions.iter() {
        if version.len() == 0 {
            return Err(RouterError::InvalidParameter);
        }
    }

    let mut covered: u32 = 0;
    for len in version_len.iter() {
        if len == 0 {
            return Err(RouterError::InvalidParameter);
        }
        covered = covered
            .checked_add(len)
            .ok_or(RouterError::InvalidParameter)?;
    }
    if covered != hops {
        return Err(RouterError::InvalidParameter);
    }

    // One tier per hop, or one per path token with the last entry unused
    if fees.len() != hops && fees.len() != path.len() {
        return Err(RouterError::InvalidParameter);
    }

    if data.amount_in <= 0 || data.amount_out_min < 0 {
        return Err(RouterError::InvalidParameter);
    }
    require_non_zero(env, &data.to)
}
