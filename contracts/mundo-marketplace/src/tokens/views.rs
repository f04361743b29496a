use crate::guards::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn check_allowed_tokens(&self, token_address: AccountId) -> bool {
        self.tokens.contains(&token_address)
    }

    pub fn get_allowed_tokens(&self, from_index: Option<u64>, limit: Option<u32>) -> Vec<AccountId> {
        let (start, limit) = page_bounds(from_index, limit);
        self.tokens.page(start, limit)
    }

    pub fn get_allowed_tokens_count(&self) -> u32 {
        self.tokens.len()
    }
}
