use near_sdk::AccountId;

use super::TOKEN;
use super::builder::EventBuilder;

pub fn emit_token_added(owner_id: &AccountId, token_id: &AccountId, total_tokens: u32) {
    EventBuilder::new(TOKEN, "token_added", owner_id)
        .field("token_id", token_id)
        .field("total_tokens", total_tokens)
        .emit();
}
