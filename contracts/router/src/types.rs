//! Router type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// ROUTER STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouterState {
    /// Current privileged account
    pub admin: Address,
    /// Address that may accept the admin role, `None` when no transfer is pending
    pub pending_admin: Option<Address>,
    /// External exchange entry point
    pub smart_router: Address,
    /// Wrapped native token
    pub wrapped_token: Address,
    /// Protocol fee in basis points of FEE_DENOMINATOR
    pub fee_rate: u32,
    /// Receiver of protocol fees
    pub fee_collector: Address,
}

// ============================================================
// SWAP PARAMS
// ============================================================

/// Amounts, recipient and deadline of an exact input swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapData {
    /// Amount of path[0] paid by the sender, fee included
    pub amount_in: i128,
    /// Minimum amount of the last path token delivered to `to`
    pub amount_out_min: i128,
    /// Recipient address
    pub to: Address,
    /// Deadline (ledger timestamp, seconds)
    pub deadline: u64,
}

// ============================================================
// QUOTE RESULTS
// ============================================================

/// Fee split of an input amount at the current fee rate
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeQuote {
    pub amount_in: i128,
    pub fee: i128,
    pub amount_net: i128,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Router state
    State,
    /// Initialization flag
    Initialized,
    /// Set while a swap is inside the external router call
    SwapLock,
}
