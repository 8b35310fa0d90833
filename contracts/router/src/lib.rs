#![no_std]

//! # Fee Router
//!
//! Fee-taking front for an external smart router.
//!
//! ## Features:
//! 1. Exact input swaps forwarded to the smart router, protocol fee taken on the input
//! 2. Native asset in and out through the wrapped native token
//! 3. Two-step admin transfer
//! 4. Treasury: smart router allowance and token withdrawal
//!
//! ## Functions:
//! - Write (8): initialize, initiate_admin_transfer, accept_admin_transfer,
//!   update_fee_rate, update_fee_collector, approve, withdraw_token, swap_exact_in
//! - Read (10): admin, pending_admin, smart_router, wrapped_token, fee_rate,
//!   fee_collector, fee_denominator, get_state, quote_fee, is_initialized

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Env, IntoVal, String, Symbol,
    TryFromVal, Val, Vec,
};

use router_math::{is_valid_fee_rate, split_fee, FEE_DENOMINATOR};

mod access;
mod error;
mod events;
mod storage;
mod types;
mod validation;

use access::{check_admin, check_pending_admin};
pub use error::RouterError;
use events::*;
use storage::*;
pub use types::*;
pub use validation::ZERO_ACCOUNT;
use validation::{require_non_zero, validate_swap_request};

// ============================================================
// CONSTANTS
// ============================================================

/// Ledgers the per-swap allowance to the smart router stays valid
const SWAP_APPROVAL_LEDGERS: u32 = 1000;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct FeeRouter;

#[contractimpl]
impl FeeRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize router
    ///
    /// # Arguments
    /// * `admin` - Privileged account, also the first fee collector
    /// * `smart_router` - External exchange entry point (immutable)
    /// * `wrapped_token` - Wrapped native token (immutable)
    /// * `fee_rate` - Protocol fee in basis points, at most 10000
    pub fn initialize(
        env: Env,
        admin: Address,
        smart_router: Address,
        wrapped_token: Address,
        fee_rate: u32,
    ) -> Result<(), RouterError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(RouterError::AlreadyInitialized);
        }

        if !is_valid_fee_rate(fee_rate) {
            return Err(RouterError::InvalidParameter);
        }
        require_non_zero(&env, &admin)?;
        require_non_zero(&env, &smart_router)?;
        require_non_zero(&env, &wrapped_token)?;
        if smart_router == wrapped_token {
            return Err(RouterError::InvalidParameter);
        }

        let state = RouterState {
            admin: admin.clone(),
            pending_admin: None,
            smart_router,
            wrapped_token,
            fee_rate,
            fee_collector: admin,
        };
        write_state(&env, &state);
        set_initialized(&env);

        emit_initialized(
            &env,
            &state.admin,
            &state.smart_router,
            &state.wrapped_token,
            state.fee_rate,
        );

        Ok(())
    }

    // ========================================================
    // ADMIN TRANSFER (Write)
    // ========================================================

    /// Nominate `new_admin`. The current admin keeps the role until the
    /// nominee accepts; nominating again replaces the pending address.
    pub fn initiate_admin_transfer(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), RouterError> {
        caller.require_auth();

        let mut state = read_state(&env)?;
        check_admin(&state, &caller).into_result()?;

        state.pending_admin = Some(new_admin.clone());
        write_state(&env, &state);

        emit_admin_transfer_initiated(&env, &state.admin, &new_admin);

        Ok(())
    }

    /// Complete a pending transfer. Only the pending admin may call.
    pub fn accept_admin_transfer(env: Env, caller: Address) -> Result<(), RouterError> {
        caller.require_auth();

        let mut state = read_state(&env)?;
        check_pending_admin(&state, &caller).into_result()?;

        let old_admin = core::mem::replace(&mut state.admin, caller.clone());
        state.pending_admin = None;
        write_state(&env, &state);

        emit_admin_transferred(&env, &old_admin, &caller);

        Ok(())
    }

    // ========================================================
    // FEE CONFIG (Write)
    // ========================================================

    pub fn update_fee_rate(env: Env, caller: Address, new_rate: u32) -> Result<(), RouterError> {
        caller.require_auth();

        let mut state = read_state(&env)?;
        check_admin(&state, &caller).into_result()?;

        if !is_valid_fee_rate(new_rate) {
            return Err(RouterError::InvalidParameter);
        }

        let old_rate = state.fee_rate;
        state.fee_rate = new_rate;
        write_state(&env, &state);

        emit_fee_rate_updated(&env, old_rate, new_rate);

        Ok(())
    }

    /// Change the fee receiver. The zero account is rejected.
    pub fn update_fee_collector(
        env: Env,
        caller: Address,
        new_collector: Address,
    ) -> Result<(), RouterError> {
        caller.require_auth();

        let mut state = read_state(&env)?;
        check_admin(&state, &caller).into_result()?;
        require_non_zero(&env, &new_collector)?;

        let old_collector = core::mem::replace(&mut state.fee_collector, new_collector.clone());
        write_state(&env, &state);

        emit_fee_collector_updated(&env, &old_collector, &new_collector);

        Ok(())
    }

    // ========================================================
    // TREASURY (Write)
    // ========================================================

    /// Set the router's allowance of `token` to the smart router
    ///
    /// Overwrites any previous allowance. Pass `MAX_APPROVAL` for an
    /// unlimited approval.
    pub fn approve(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), RouterError> {
        caller.require_auth();

        let state = read_state(&env)?;
        check_admin(&state, &caller).into_result()?;

        if amount < 0 {
            return Err(RouterError::InvalidParameter);
        }

        let router_addr = env.current_contract_address();
        // Token contracts reject an allowance living up to the max ledger itself
        let expiration_ledger = env.ledger().max_live_until_ledger().saturating_sub(1);
        token::Client::new(&env, &token).approve(
            &router_addr,
            &state.smart_router,
            &amount,
            &expiration_ledger,
        );

        emit_approved(&env, &token, &state.smart_router, amount);

        Ok(())
    }

    /// Send `amount` of `token` held by the router to `recipient`
    pub fn withdraw_token(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        recipient: Address,
    ) -> Result<(), RouterError> {
        caller.require_auth();

        let state = read_state(&env)?;
        check_admin(&state, &caller).into_result()?;

        if amount < 0 {
            return Err(RouterError::InvalidParameter);
        }
        require_non_zero(&env, &recipient)?;

        let router_addr = env.current_contract_address();
        let client = token::Client::new(&env, &token);
        let held = client.balance(&router_addr);
        if amount > held {
            log!(&env, "withdraw {} exceeds balance {}", amount, held);
            return Err(RouterError::InsufficientBalance);
        }

        client.transfer(&router_addr, &recipient, &amount);

        emit_withdrawn(&env, &token, &recipient, amount);

        Ok(())
    }

    // ========================================================
    // SWAP (Write)
    // ========================================================

    /// Exact input swap through the smart router
    ///
    /// The fee is taken from `data.amount_in` and paid to the fee collector;
    /// the rest is forwarded. When `path[0]` is the wrapped native token the
    /// input is wrapped from the sender's native balance, and when the last
    /// token is the wrapped native token the output is unwrapped to `data.to`.
    ///
    /// # Arguments
    /// * `sender` - Payer of the input
    /// * `path` - Tokens from input to output
    /// * `pool_versions` - Exchange version tag per hop group
    /// * `version_len` - Hops covered by each version tag
    /// * `fees` - Pool fee tier per hop
    /// * `data` - Amounts, recipient and deadline
    /// * `max_fee_rate` - Highest fee rate the sender accepts, 0 for the current rate
    ///
    /// Returns the per-hop amounts reported by the smart router.
    pub fn swap_exact_in(
        env: Env,
        sender: Address,
        path: Vec<Address>,
        pool_versions: Vec<String>,
        version_len: Vec<u32>,
        fees: Vec<u32>,
        data: SwapData,
        max_fee_rate: u32,
    ) -> Result<Vec<i128>, RouterError> {
        sender.require_auth();

        let state = read_state(&env)?;

        if is_swap_locked(&env) {
            return Err(RouterError::SwapLocked);
        }

        // Check deadline
        if env.ledger().timestamp() > data.deadline {
            return Err(RouterError::Expired);
        }

        validate_swap_request(&env, &path, &pool_versions, &version_len, &fees, &data)?;

        if max_fee_rate != 0 && state.fee_rate > max_fee_rate {
            return Err(RouterError::FeeRateExceeded);
        }

        let split = split_fee(&env, data.amount_in, state.fee_rate)
            .ok_or(RouterError::InvalidParameter)?;
        if split.net <= 0 {
            return Err(RouterError::InvalidParameter);
        }

        let router_addr = env.current_contract_address();
        let token_in = path.first().ok_or(RouterError::InvalidParameter)?;
        let token_out = path.last().ok_or(RouterError::InvalidParameter)?;
        let input = token::Client::new(&env, &token_in);

        // Pull the full input
        if token_in == state.wrapped_token {
            Self::wrap_native(&env, &state.wrapped_token, &sender, &router_addr, data.amount_in)?;
        } else {
            input.transfer(&sender, &router_addr, &data.amount_in);
        }

        // Fee and allowance are settled before control leaves the router
        if split.fee > 0 {
            input.transfer(&router_addr, &state.fee_collector, &split.fee);
        }
        let expiration_ledger = env.ledger().sequence() + SWAP_APPROVAL_LEDGERS;
        input.approve(&router_addr, &state.smart_router, &split.net, &expiration_ledger);

        let unwrap_output = token_out == state.wrapped_token;
        let hop_recipient = if unwrap_output {
            router_addr.clone()
        } else {
            data.to.clone()
        };

        let output = token::Client::new(&env, &token_out);
        let balance_before = output.balance(&hop_recipient);

        let forwarded = SwapData {
            amount_in: split.net,
            amount_out_min: data.amount_out_min,
            to: hop_recipient.clone(),
            deadline: data.deadline,
        };

        set_swap_lock(&env);
        let amounts = Self::call_smart_router(
            &env,
            &state.smart_router,
            &router_addr,
            &path,
            &pool_versions,
            &version_len,
            &fees,
            &forwarded,
        )?;
        clear_swap_lock(&env);

        let amount_out = output.balance(&hop_recipient) - balance_before;
        if amount_out < data.amount_out_min {
            log!(&env, "swap output {} below minimum {}", amount_out, data.amount_out_min);
            return Err(RouterError::SlippageExceeded);
        }

        if unwrap_output && amount_out > 0 {
            Self::unwrap_native(&env, &state.wrapped_token, &router_addr, &data.to, amount_out)?;
        }

        log!(&env, "swap fee {} forwarded {} out {}", split.fee, split.net, amount_out);

        emit_swap(
            &env,
            &sender,
            &token_in,
            &token_out,
            data.amount_in,
            split.fee,
            amount_out,
            &data.to,
        );

        Ok(amounts)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn admin(env: Env) -> Result<Address, RouterError> {
        Ok(read_state(&env)?.admin)
    }

    /// `None` when no admin transfer is pending
    pub fn pending_admin(env: Env) -> Result<Option<Address>, RouterError> {
        Ok(read_state(&env)?.pending_admin)
    }

    pub fn smart_router(env: Env) -> Result<Address, RouterError> {
        Ok(read_state(&env)?.smart_router)
    }

    pub fn wrapped_token(env: Env) -> Result<Address, RouterError> {
        Ok(read_state(&env)?.wrapped_token)
    }

    pub fn fee_rate(env: Env) -> Result<u32, RouterError> {
        Ok(read_state(&env)?.fee_rate)
    }

    pub fn fee_collector(env: Env) -> Result<Address, RouterError> {
        Ok(read_state(&env)?.fee_collector)
    }

    pub fn fee_denominator(_env: Env) -> u32 {
        FEE_DENOMINATOR
    }

    /// Get full router state
    pub fn get_state(env: Env) -> Result<RouterState, RouterError> {
        read_state(&env)
    }

    /// Preview the fee split of `amount_in` at the current fee rate
    pub fn quote_fee(env: Env, amount_in: i128) -> Result<FeeQuote, RouterError> {
        let state = read_state(&env)?;
        let split = split_fee(&env, amount_in, state.fee_rate)
            .ok_or(RouterError::InvalidParameter)?;

        Ok(FeeQuote {
            amount_in,
            fee: split.fee,
            amount_net: split.net,
        })
    }

    /// Check if router is initialized
    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Native from `from` in, wrapped to `to`
    fn wrap_native(
        env: &Env,
        wrapped_token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), RouterError> {
        invoke_external(
            env,
            wrapped_token,
            "deposit",
            vec![
                env,
                from.clone().into_val(env),
                to.clone().into_val(env),
                amount.into_val(env),
            ],
        )
    }

    /// Wrapped from `from` burned, native to `to`
    fn unwrap_native(
        env: &Env,
        wrapped_token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), RouterError> {
        invoke_external(
            env,
            wrapped_token,
            "withdraw",
            vec![
                env,
                from.clone().into_val(env),
                to.clone().into_val(env),
                amount.into_val(env),
            ],
        )
    }

    // SmartRouter.swap_exact_input(payer, path, pool_versions, version_len, fees, data) -> amounts
    fn call_smart_router(
        env: &Env,
        smart_router: &Address,
        payer: &Address,
        path: &Vec<Address>,
        pool_versions: &Vec<String>,
        version_len: &Vec<u32>,
        fees: &Vec<u32>,
        data: &SwapData,
    ) -> Result<Vec<i128>, RouterError> {
        invoke_external(
            env,
            smart_router,
            "swap_exact_input",
            vec![
                env,
                payer.clone().into_val(env),
                path.clone().into_val(env),
                pool_versions.clone().into_val(env),
                version_len.clone().into_val(env),
                fees.clone().into_val(env),
                data.clone().into_val(env),
            ],
        )
    }
}

// ============================================================
// HELPERS FOR CROSS-CONTRACT CALLS
// ============================================================

/// Invoke `func` on `contract`, mapping any failure of the callee to
/// `ExternalCallFailed`
fn invoke_external<T>(
    env: &Env,
    contract: &Address,
    func: &str,
    args: Vec<Val>,
) -> Result<T, RouterError>
where
    T: TryFromVal<Env, Val>,
{
    let result = env.try_invoke_contract::<T, soroban_sdk::Error>(
        contract,
        &Symbol::new(env, func),
        args,
    );

    match result {
        Ok(Ok(value)) => Ok(value),
        _ => Err(RouterError::ExternalCallFailed),
    }
}
