/// Errors from bucket store operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested bucket does not exist.
    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    /// A bucket with this name already exists.
    #[error("bucket already exists: {0}")]
    BucketExists(String),

    /// The requested object does not exist in the bucket.
    #[error("object not found: {bucket}/{name}")]
    ObjectNotFound { bucket: String, name: String },

    /// The bucket name violates the naming rules.
    #[error("invalid bucket name {name:?}: {reason}")]
    InvalidBucketName { name: String, reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
