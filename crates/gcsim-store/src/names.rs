//! Bucket name validation.
//!
//! Valid bucket names:
//! - Are 3 to 63 characters long
//! - Contain only lowercase letters, digits, `-`, `_` and `.`
//! - Start and end with a letter or digit
//! - Do not contain `..`

use crate::error::{StoreError, StoreResult};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 63;

/// Validate a bucket name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use gcsim_store::names::validate_bucket_name;
///
/// assert!(validate_bucket_name("my-bucket").is_ok());
/// assert!(validate_bucket_name("ab").is_err());
/// assert!(validate_bucket_name("Upper").is_err());
/// ```
pub fn validate_bucket_name(name: &str) -> StoreResult<()> {
    let invalid = |reason: String| StoreError::InvalidBucketName {
        name: name.to_string(),
        reason,
    };

    if name.len() < MIN_LEN || name.len() > MAX_LEN {
        return Err(invalid(format!(
            "length must be between {MIN_LEN} and {MAX_LEN} characters"
        )));
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(format!("contains forbidden character: {ch:?}")));
    }

    let alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    if !name.starts_with(alnum) || !name.ends_with(alnum) {
        return Err(invalid("must start and end with a letter or digit".into()));
    }

    if name.contains("..") {
        return Err(invalid("must not contain '..'".into()));
    }

    Ok(())
}
