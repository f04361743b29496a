use crate::*;

/// Implicit accounts whose hex body is all zeroes stand in for the zero
/// address: `000…0` (64 hex, NEAR implicit) and `0x000…0` (40 hex, ETH implicit).
pub fn is_null_account(account_id: &AccountId) -> bool {
    let id = account_id.as_str();
    let body = match id.strip_prefix("0x") {
        Some(hex) if hex.len() == 40 => hex,
        Some(_) => return false,
        None if id.len() == 64 => id,
        None => return false,
    };
    body.bytes().all(|b| b == b'0')
}

pub(crate) fn validate_token_account(token_id: &AccountId) -> Result<(), MarketplaceError> {
    if is_null_account(token_id) {
        return Err(MarketplaceError::InvalidArgument(format!(
            "Token address {} is the null account",
            token_id
        )));
    }
    Ok(())
}

/// Byte-length cap only; empty text is stored as given.
fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), MarketplaceError> {
    if value.len() > max_len {
        return Err(MarketplaceError::InvalidArgument(format!(
            "{} exceeds max length of {} bytes",
            field, max_len
        )));
    }
    Ok(())
}

pub(crate) fn validate_new_item(item: &NewItem) -> Result<(), MarketplaceError> {
    validate_text("name", &item.name, MAX_NAME_LEN)?;
    validate_text("category", &item.category, MAX_CATEGORY_LEN)?;
    validate_text("image", &item.image, MAX_IMAGE_LEN)?;
    validate_text("description", &item.description, MAX_DESCRIPTION_LEN)?;
    if item.rating > u32::from(MAX_RATING) {
        return Err(MarketplaceError::InvalidArgument(format!(
            "Rating {} is outside 0..={}",
            item.rating, MAX_RATING
        )));
    }
    Ok(())
}
