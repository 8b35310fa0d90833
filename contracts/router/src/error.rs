//! Router error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization
    Unauthorized = 10,

    // Parameters: fee rate out of range, zero account, malformed swap path
    InvalidParameter = 20,

    // Swap errors
    Expired = 30,
    SlippageExceeded = 31,
    ExternalCallFailed = 32,
    SwapLocked = 33,
    FeeRateExceeded = 34,

    // Treasury errors
    InsufficientBalance = 40,
}
