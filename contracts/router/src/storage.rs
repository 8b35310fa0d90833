//! Router storage operations

use soroban_sdk::Env;

use crate::error::RouterError;
use crate::types::{DataKey, RouterState};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// STATE
// ============================================================

pub fn write_state(env: &Env, state: &RouterState) {
    env.storage().persistent().set(&DataKey::State, state);
    extend_ttl(env, &DataKey::State);
}

pub fn read_state(env: &Env) -> Result<RouterState, RouterError> {
    let key = DataKey::State;
    let state = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RouterError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(state)
}

// ============================================================
// SWAP LOCK
// ============================================================

pub fn is_swap_locked(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::SwapLock)
}

pub fn set_swap_lock(env: &Env) {
    env.storage().temporary().set(&DataKey::SwapLock, &true);
}

pub fn clear_swap_lock(env: &Env) {
    env.storage().temporary().remove(&DataKey::SwapLock);
}
