use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Clamps caller-supplied pagination to `MAX_PAGE_LIMIT`.
pub(crate) fn page_bounds(from_index: Option<u64>, limit: Option<u32>) -> (u64, u32) {
    let start = from_index.unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
    (start, limit)
}
