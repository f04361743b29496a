//! Typed errors for the marketplace contract.
//!
//! Public methods return `Result<_, MarketplaceError>` under
//! `#[handle_result]`; an `Err` aborts the call through `env::panic_str()`
//! with the `Display` message, which rolls back every write of the call.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum MarketplaceError {
    /// Caller is not the contract owner.
    Unauthorized(String),
    /// A supplied field violates its declared constraint.
    InvalidArgument(String),
    /// Lookup outside the populated range.
    NotFound(String),
    /// Change call made without exactly 1 yoctoNEAR attached.
    InsufficientDeposit(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn item_not_found(id: u64) -> Self {
        Self::NotFound(format!("Item {} does not exist", id))
    }
}
