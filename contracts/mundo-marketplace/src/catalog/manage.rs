use near_sdk::json_types::U128;

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Owner only; requires 1 yoctoNEAR. Returns the new item's id.
    #[payable]
    #[handle_result]
    #[allow(clippy::too_many_arguments)]
    pub fn list(
        &mut self,
        name: String,
        category: String,
        image: String,
        cost: U128,
        rating: u32,
        stock: u64,
        description: String,
    ) -> Result<u64, MarketplaceError> {
        let caller = env::predecessor_account_id();
        self.access.require_owner(&caller)?;
        check_one_yocto()?;

        self.catalog.list(
            &self.access,
            &caller,
            NewItem {
                name,
                category,
                image,
                cost,
                rating,
                stock,
                description,
            },
        )
    }
}
