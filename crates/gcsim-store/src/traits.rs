use gcsim_types::Object;

use crate::error::StoreResult;
use crate::listing::{ListOptions, Listing};

/// Bucket and object storage backing the emulator.
///
/// Implementations must satisfy these invariants:
/// - Object names are unique per bucket; `put_object` replaces.
/// - Reads hand out owned copies. Callers never observe later writes
///   through an object they already hold.
/// - Listings are sorted by object name.
pub trait BucketStore: Send + Sync {
    /// Create an empty bucket. Fails if the name is invalid or taken.
    fn create_bucket(&self, name: &str) -> StoreResult<()>;

    fn bucket_exists(&self, name: &str) -> StoreResult<bool>;

    /// All bucket names, sorted.
    fn list_buckets(&self) -> StoreResult<Vec<String>>;

    /// Store an object in its bucket, replacing any object with the same name.
    fn put_object(&self, object: Object) -> StoreResult<()>;

    fn get_object(&self, bucket: &str, name: &str) -> StoreResult<Object>;

    fn delete_object(&self, bucket: &str, name: &str) -> StoreResult<()>;

    /// List a bucket, filtered and folded by `options`.
    fn list_objects(&self, bucket: &str, options: &ListOptions) -> StoreResult<Listing>;
}
