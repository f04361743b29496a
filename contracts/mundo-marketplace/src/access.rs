//! Single-owner access control.
//!
//! The owner is fixed at initialization; there is no transfer operation.
//! Gated operations receive the caller explicitly and call
//! [`AccessControl::require_owner`] before touching any state.

use near_sdk::{AccountId, near};

use crate::MarketplaceError;

#[near(serializers = [borsh])]
pub struct AccessControl {
    owner_id: AccountId,
}

impl AccessControl {
    pub fn new(owner_id: AccountId) -> Self {
        Self { owner_id }
    }

    pub fn owner_id(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn is_owner(&self, account_id: &AccountId) -> bool {
        account_id == &self.owner_id
    }

    pub fn require_owner(&self, caller: &AccountId) -> Result<(), MarketplaceError> {
        if !self.is_owner(caller) {
            return Err(MarketplaceError::only_owner("contract owner"));
        }
        Ok(())
    }
}
