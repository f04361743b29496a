//! Mundo marketplace: owner-curated item catalog plus an allowlist of
//! fungible-token contracts accepted as payment, with JSON events.

use near_sdk::{AccountId, BorshStorageKey, PanicOnDefault, env, near};

mod access;
mod admin;
mod catalog;
pub mod constants;
mod errors;
mod events;
mod guards;
mod tokens;
mod validation;


pub use access::AccessControl;
pub use admin::MarketConfig;
pub use catalog::{Item, ItemCatalog, NewItem};
pub use constants::*;
pub use errors::MarketplaceError;
pub use tokens::TokenAllowlist;
pub use validation::is_null_account;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    AllowedTokens,
    Items,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml at initialization.
    pub version: String,

    pub access: AccessControl,
    pub tokens: TokenAllowlist,
    pub catalog: ItemCatalog,
}
