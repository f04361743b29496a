use near_sdk::AccountId;

use super::ITEM;
use super::builder::EventBuilder;
use crate::catalog::Item;

pub fn emit_item_listed(owner_id: &AccountId, item: &Item) {
    EventBuilder::new(ITEM, "item_listed", owner_id)
        .field("item_id", item.id)
        .field("name", item.name.as_str())
        .field("category", item.category.as_str())
        .field("cost", item.cost)
        .field("rating", u32::from(item.rating))
        .field("stock", item.stock)
        .emit();
}
