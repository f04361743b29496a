use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Owner only; requires 1 yoctoNEAR. `true` when the token was not yet allowed.
    #[payable]
    #[handle_result]
    pub fn add_token(&mut self, token_address: AccountId) -> Result<bool, MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.access.require_owner(&caller)?;
        check_one_yocto()?;

        self.tokens.add_token(&self.access, &caller, token_address)
    }
}
