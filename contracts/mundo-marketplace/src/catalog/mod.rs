//! Append-only item catalog.
//!
//! Ids come from `next_item_id`, which only ever moves forward, so an id is
//! never handed out twice. The counter doubles as the catalog length because
//! nothing is removed.

mod manage;
mod types;
mod views;

pub use types::{Item, NewItem};

use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use crate::validation::validate_new_item;
use crate::{AccessControl, MarketplaceError, StorageKey, events};

#[near(serializers = [borsh])]
pub struct ItemCatalog {
    items: LookupMap<u64, Item>,
    next_item_id: u64,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self {
            items: LookupMap::new(StorageKey::Items),
            next_item_id: 0,
        }
    }

    /// Owner only. Validates every field before anything is written.
    pub fn list(
        &mut self,
        access: &AccessControl,
        caller: &AccountId,
        new_item: NewItem,
    ) -> Result<u64, MarketplaceError> {
        access.require_owner(caller)?;
        validate_new_item(&new_item)?;

        let rating = u8::try_from(new_item.rating)
            .map_err(|_| MarketplaceError::InternalError("Validated rating out of range".into()))?;
        let id = self.next_item_id;
        let next_item_id = id
            .checked_add(1)
            .ok_or_else(|| MarketplaceError::InternalError("Item id overflow".into()))?;

        let item = Item {
            id,
            name: new_item.name,
            category: new_item.category,
            image: new_item.image,
            cost: new_item.cost,
            rating,
            stock: new_item.stock,
            description: new_item.description,
        };
        events::emit_item_listed(caller, &item);
        self.items.insert(id, item);
        self.next_item_id = next_item_id;

        Ok(id)
    }

    pub fn get(&self, id: u64) -> Result<&Item, MarketplaceError> {
        if id >= self.next_item_id {
            return Err(MarketplaceError::item_not_found(id));
        }
        self.items
            .get(&id)
            .ok_or_else(|| MarketplaceError::InternalError(format!("Item {} missing from storage", id)))
    }

    pub fn len(&self) -> u64 {
        self.next_item_id
    }

    pub fn is_empty(&self) -> bool {
        self.next_item_id == 0
    }

    /// Items with ids in `[from_index, from_index + limit)`, clipped to the catalog.
    pub fn page(&self, from_index: u64, limit: u32) -> Vec<Item> {
        let end = from_index
            .saturating_add(u64::from(limit))
            .min(self.next_item_id);
        (from_index..end)
            .filter_map(|id| self.items.get(&id).cloned())
            .collect()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}
