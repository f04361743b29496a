use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_initialized(owner_id: &AccountId, version: &str) {
    EventBuilder::new(CONTRACT, "contract_init", owner_id)
        .field("owner_id", owner_id)
        .field("version", version)
        .emit();
}
