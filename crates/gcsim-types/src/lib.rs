//! Object model and wire documents for the gcsim storage emulator.
//!
//! Every other gcsim crate depends on `gcsim-types`. It owns the domain
//! [`Object`] and the JSON shapes the `storage/v1` API renders it as.
//!
//! # Key Types
//!
//! - [`Object`] -- a stored object: content, checksums, metadata, timestamps
//! - [`AclRule`] -- an access-control entry attached to an object
//! - [`ObjectResponse`] -- the full `storage#object` JSON representation
//! - [`ListObjectsResponse`] -- the default `storage#objects` listing document
//!
//! Formatting helpers ([`format_timestamp`], [`crc32c_base64`],
//! [`md5_base64`]) are shared by the full serializer and by partial
//! responses, so both paths render identical strings.

pub mod checksum;
pub mod object;
pub mod response;
pub mod temporal;

pub use checksum::{crc32c_base64, md5_base64};
pub use object::{AclRole, AclRule, Object, DEFAULT_CONTENT_TYPE};
pub use response::{
    AccessControlResponse, BucketResponse, ListBucketsResponse, ListObjectsResponse,
    ObjectResponse, BUCKETS_KIND, BUCKET_KIND, OBJECTS_KIND, OBJECT_KIND,
};
pub use temporal::format_timestamp;
