//! Access guards
//!
//! Guards only compare addresses. Callers authenticate with
//! `require_auth` first and turn a denied guard into
//! `RouterError::Unauthorized`.

use soroban_sdk::Address;

use crate::error::RouterError;
use crate::types::RouterState;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Authorization {
    Granted,
    Denied,
}

impl Authorization {
    pub fn into_result(self) -> Result<(), RouterError> {
        match self {
            Authorization::Granted => Ok(()),
            Authorization::Denied => Err(RouterError::Unauthorized),
        }
    }
}

pub fn check_admin(state: &RouterState, caller: &Address) -> Authorization {
    if &state.admin == caller {
        Authorization::Granted
    } else {
        Authorization::Denied
    }
}

/// Denied when no transfer is pending
pub fn check_pending_admin(state: &RouterState, caller: &Address) -> Authorization {
    match &state.pending_admin {
        Some(pending) if pending == caller => Authorization::Granted,
        _ => Authorization::Denied,
    }
}
