// Constants shared by the router contract and its tests.

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Scale that fee rates are expressed against (basis points)
/// A fee rate of 100 is 1%, a fee rate of 10_000 is 100%
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Highest fee rate accepted by the router
pub const MAX_FEE_RATE: u32 = FEE_DENOMINATOR;

// ============================================================
// TOKEN CONSTANTS
// ============================================================

/// Allowance amount treated as "infinite"
/// Largest amount a Soroban token can represent
pub const MAX_APPROVAL: i128 = i128::MAX;
