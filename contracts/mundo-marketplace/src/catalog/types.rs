use near_sdk::json_types::U128;
use near_sdk::near;

/// A listed item. Immutable once stored; `stock == 0` reads as sold out.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub image: String,
    /// Price in the smallest unit of the payment token.
    pub cost: U128,
    pub rating: u8,
    pub stock: u64,
    pub description: String,
}

/// Caller-supplied fields of a listing, before an id is assigned.
#[derive(Clone, Debug)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub image: String,
    pub cost: U128,
    pub rating: u32,
    pub stock: u64,
    pub description: String,
}
