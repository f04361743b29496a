mod builder;
mod types;

mod contract;
mod item;
mod token;

pub use contract::*;
pub use item::*;
pub use token::*;

pub(crate) const STANDARD: &str = "mundo";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
pub(crate) const ITEM: &str = "ITEM_UPDATE";
