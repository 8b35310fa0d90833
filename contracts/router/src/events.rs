//! Router events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when router is initialized
pub fn emit_initialized(
    env: &Env,
    admin: &Address,
    smart_router: &Address,
    wrapped_token: &Address,
    fee_rate: u32,
) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (admin.clone(), smart_router.clone(), wrapped_token.clone(), fee_rate),
    );
}

/// Emitted when the admin nominates a successor
pub fn emit_admin_transfer_initiated(env: &Env, admin: &Address, pending_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminTransferInitiated"),),
        (admin.clone(), pending_admin.clone()),
    );
}

/// Emitted when the pending admin accepts the role
pub fn emit_admin_transferred(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminTransferred"),),
        (old_admin.clone(), new_admin.clone()),
    );
}

pub fn emit_fee_rate_updated(env: &Env, old_rate: u32, new_rate: u32) {
    env.events().publish(
        (Symbol::new(env, "FeeRateUpdated"),),
        (old_rate, new_rate),
    );
}

pub fn emit_fee_collector_updated(env: &Env, old_collector: &Address, new_collector: &Address) {
    env.events().publish(
        (Symbol::new(env, "FeeCollectorUpdated"),),
        (old_collector.clone(), new_collector.clone()),
    );
}

/// Emitted when the router sets its allowance to the smart router
pub fn emit_approved(env: &Env, token: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Approved"),),
        (token.clone(), spender.clone(), amount),
    );
}

/// Emitted when the admin withdraws tokens held by the router
pub fn emit_withdrawn(env: &Env, token: &Address, recipient: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Withdrawn"),),
        (token.clone(), recipient.clone(), amount),
    );
}

/// Emitted on successful swap
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    fee: i128,
    amount_out: i128,
    recipient: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            sender.clone(),
            token_in.clone(),
            token_out.clone(),
            amount_in,
            fee,
            amount_out,
            recipient.clone(),
        ),
    );
}
