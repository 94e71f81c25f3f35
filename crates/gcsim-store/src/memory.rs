use std::collections::BTreeMap;
use std::sync::RwLock;

use gcsim_types::Object;

use crate::error::{StoreError, StoreResult};
use crate::listing::{fold_listing, ListOptions, Listing};
use crate::names::validate_bucket_name;
use crate::traits::BucketStore;

type Bucket = BTreeMap<String, Object>;

/// In-memory, `BTreeMap`-based bucket store.
///
/// All buckets are held behind one `RwLock`. Objects are cloned on read and
/// write, so listings never keep the lock while a response is built.
pub struct InMemoryBucketStore {
    buckets: RwLock<BTreeMap<String, Bucket>>,
}

impl InMemoryBucketStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Total number of objects across all buckets.
    pub fn object_count(&self) -> usize {
        self.buckets
            .read()
            .expect("lock poisoned")
            .values()
            .map(BTreeMap::len)
            .sum()
    }
}

impl Default for InMemoryBucketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketStore for InMemoryBucketStore {
    fn create_bucket(&self, name: &str) -> StoreResult<()> {
        validate_bucket_name(name)?;
        let mut buckets = self.buckets.write().expect("lock poisoned");
        if buckets.contains_key(name) {
            return Err(StoreError::BucketExists(name.to_string()));
        }
        buckets.insert(name.to_string(), Bucket::new());
        tracing::debug!(bucket = name, "created bucket");
        Ok(())
    }

    fn bucket_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.buckets.read().expect("lock poisoned").contains_key(name))
    }

    fn list_buckets(&self) -> StoreResult<Vec<String>> {
        Ok(self.buckets.read().expect("lock poisoned").keys().cloned().collect())
    }

    fn put_object(&self, object: Object) -> StoreResult<()> {
        let mut buckets = self.buckets.write().expect("lock poisoned");
        let bucket = buckets
            .get_mut(&object.bucket_name)
            .ok_or_else(|| StoreError::BucketNotFound(object.bucket_name.clone()))?;
        tracing::debug!(
            bucket = %object.bucket_name,
            object = %object.name,
            size = object.size(),
            "stored object"
        );
        bucket.insert(object.name.clone(), object);
        Ok(())
    }

    fn get_object(&self, bucket: &str, name: &str) -> StoreResult<Object> {
        let buckets = self.buckets.read().expect("lock poisoned");
        let objects = buckets
            .get(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        objects.get(name).cloned().ok_or_else(|| StoreError::ObjectNotFound {
            bucket: bucket.to_string(),
            name: name.to_string(),
        })
    }

    fn delete_object(&self, bucket: &str, name: &str) -> StoreResult<()> {
        let mut buckets = self.buckets.write().expect("lock poisoned");
        let objects = buckets
            .get_mut(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        if objects.remove(name).is_none() {
            return Err(StoreError::ObjectNotFound {
                bucket: bucket.to_string(),
                name: name.to_string(),
            });
        }
        tracing::debug!(bucket, object = name, "deleted object");
        Ok(())
    }

    fn list_objects(&self, bucket: &str, options: &ListOptions) -> StoreResult<Listing> {
        let buckets = self.buckets.read().expect("lock poisoned");
        let objects = buckets
            .get(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        Ok(fold_listing(objects.values(), options))
    }
}

impl std::fmt::Debug for InMemoryBucketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buckets = self.buckets.read().expect("lock poisoned");
        f.debug_struct("InMemoryBucketStore")
            .field("bucket_count", &buckets.len())
            .finish()
    }
}
