use crate::guards::page_bounds;
use crate::*;

#[near]
impl Contract {
    /// Fails with `NotFound` when `id >= length()`.
    #[handle_result]
    pub fn items(&self, id: u64) -> Result<Item, MarketplaceError> {
        self.catalog.get(id).cloned()
    }

    pub fn length(&self) -> u64 {
        self.catalog.len()
    }

    pub fn get_items(&self, from_index: Option<u64>, limit: Option<u32>) -> Vec<Item> {
        let (start, limit) = page_bounds(from_index, limit);
        self.catalog.page(start, limit)
    }

    /// Scans one page window of ids and keeps the matches, so a page may
    /// come back short; continue from `from_index + limit`.
    pub fn get_items_by_category(
        &self,
        category: String,
        from_index: Option<u64>,
        limit: Option<u32>,
    ) -> Vec<Item> {
        let (start, limit) = page_bounds(from_index, limit);
        self.catalog
            .page(start, limit)
            .into_iter()
            .filter(|item| item.category == category)
            .collect()
    }
}
