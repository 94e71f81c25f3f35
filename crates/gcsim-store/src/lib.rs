//! Bucket and object storage for the gcsim emulator.
//!
//! The server consults a [`BucketStore`] for the objects and prefixes of a
//! listing; the store never looks at field selections or wire formats.
//!
//! # Storage Backends
//!
//! - [`InMemoryBucketStore`] -- `BTreeMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Bucket names are validated on creation ([`names::validate_bucket_name`]).
//! 2. Reads return owned copies; concurrent reads are always safe.
//! 3. Listings are sorted by name and prefixes are unique.
//! 4. Missing buckets and objects are errors, never empty results.

pub mod error;
pub mod listing;
pub mod memory;
pub mod names;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use listing::{fold_listing, ListOptions, Listing};
pub use memory::InMemoryBucketStore;
pub use traits::BucketStore;
