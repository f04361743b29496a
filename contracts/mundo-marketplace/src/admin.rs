use crate::*;

/// Compile-time listing limits, exposed for clients that validate up front.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketConfig {
    pub max_rating: u8,
    pub max_name_len: u32,
    pub max_category_len: u32,
    pub max_image_len: u32,
    pub max_description_len: u32,
    pub max_page_limit: u32,
}

#[near]
impl Contract {
    // --- Init ---

    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        let version = env!("CARGO_PKG_VERSION").to_string();
        events::emit_contract_initialized(&owner_id, &version);
        Self {
            version,
            access: AccessControl::new(owner_id),
            tokens: TokenAllowlist::new(),
            catalog: ItemCatalog::new(),
        }
    }

    // --- Views ---

    pub fn get_owner(&self) -> &AccountId {
        self.access.owner_id()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_config(&self) -> MarketConfig {
        MarketConfig {
            max_rating: MAX_RATING,
            max_name_len: MAX_NAME_LEN as u32,
            max_category_len: MAX_CATEGORY_LEN as u32,
            max_image_len: MAX_IMAGE_LEN as u32,
            max_description_len: MAX_DESCRIPTION_LEN as u32,
            max_page_limit: MAX_PAGE_LIMIT,
        }
    }
}
