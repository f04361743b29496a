//! Marketplace-wide limits.

use near_sdk::NearToken;

/// Highest accepted item rating (ratings are 0..=5 stars).
pub const MAX_RATING: u8 = 5;

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_CATEGORY_LEN: usize = 64;
/// Image URIs may carry IPFS gateways or data prefixes.
pub const MAX_IMAGE_LEN: usize = 512;
pub const MAX_DESCRIPTION_LEN: usize = 2_048;

/// Page size used by enumeration views when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
/// Hard cap on entries returned (or scanned) by a single view call.
pub const MAX_PAGE_LIMIT: u32 = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
