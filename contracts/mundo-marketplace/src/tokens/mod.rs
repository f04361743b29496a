//! Allowlist of fungible-token contracts accepted as payment.

mod manage;
mod views;

use near_sdk::store::IterableSet;
use near_sdk::{AccountId, log, near};

use crate::validation::validate_token_account;
use crate::{AccessControl, MarketplaceError, StorageKey, events};

#[near(serializers = [borsh])]
pub struct TokenAllowlist {
    tokens: IterableSet<AccountId>,
}

impl TokenAllowlist {
    pub fn new() -> Self {
        Self {
            tokens: IterableSet::new(StorageKey::AllowedTokens),
        }
    }

    /// Owner only. Re-adding a present token is a no-op; returns whether the
    /// set changed.
    pub fn add_token(
        &mut self,
        access: &AccessControl,
        caller: &AccountId,
        token_id: AccountId,
    ) -> Result<bool, MarketplaceError> {
        access.require_owner(caller)?;
        validate_token_account(&token_id)?;

        if self.tokens.contains(&token_id) {
            log!("Token {} already allowed", token_id);
            return Ok(false);
        }
        events::emit_token_added(caller, &token_id, self.tokens.len() + 1);
        self.tokens.insert(token_id);
        Ok(true)
    }

    /// Null accounts are never inserted, so they always report `false`.
    pub fn contains(&self, token_id: &AccountId) -> bool {
        self.tokens.contains(token_id)
    }

    pub fn len(&self) -> u32 {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn page(&self, from_index: u64, limit: u32) -> Vec<AccountId> {
        self.tokens
            .iter()
            .skip(usize::try_from(from_index).unwrap_or(usize::MAX))
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

impl Default for TokenAllowlist {
    fn default() -> Self {
        Self::new()
    }
}
