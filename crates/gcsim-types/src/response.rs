use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::object::{AclRole, Object};
use crate::temporal::format_timestamp;

/// Resource kind of a single object.
pub const OBJECT_KIND: &str = "storage#object";
/// Resource kind of an object listing.
pub const OBJECTS_KIND: &str = "storage#objects";
/// Resource kind of a single bucket.
pub const BUCKET_KIND: &str = "storage#bucket";
/// Resource kind of a bucket listing.
pub const BUCKETS_KIND: &str = "storage#buckets";

/// Full JSON representation of an object (`storage#object`).
///
/// `size` and `generation` are 64-bit integers and travel as decimal
/// strings, as the API encodes every int64.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectResponse {
    pub kind: String,
    pub id: String,
    pub name: String,
    pub bucket: String,
    pub size: String,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_encoding: String,
    pub crc32c: String,
    pub md5_hash: String,
    pub etag: String,
    pub acl: Vec<AccessControlResponse>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    pub time_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_deleted: Option<String>,
    pub updated: String,
    pub generation: String,
}

impl From<&Object> for ObjectResponse {
    fn from(obj: &Object) -> Self {
        Self {
            kind: OBJECT_KIND.into(),
            id: obj.id(),
            name: obj.name.clone(),
            bucket: obj.bucket_name.clone(),
            size: obj.size().to_string(),
            content_type: obj.content_type.clone(),
            content_encoding: obj.content_encoding.clone(),
            crc32c: obj.crc32c.clone(),
            md5_hash: obj.md5_hash.clone(),
            etag: obj.etag.clone(),
            acl: AccessControlResponse::for_object(obj),
            metadata: obj.metadata.clone(),
            time_created: format_timestamp(&obj.created),
            time_deleted: obj.deleted.as_ref().map(format_timestamp),
            updated: format_timestamp(&obj.updated),
            generation: obj.generation.to_string(),
        }
    }
}

/// One entry of an object's `acl` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlResponse {
    pub bucket: String,
    pub object: String,
    pub entity: String,
    pub role: AclRole,
}

impl AccessControlResponse {
    /// The `acl` list of `obj`, with bucket and object filled in.
    pub fn for_object(obj: &Object) -> Vec<Self> {
        obj.acl
            .iter()
            .map(|rule| Self {
                bucket: obj.bucket_name.clone(),
                object: obj.name.clone(),
                entity: rule.entity.clone(),
                role: rule.role,
            })
            .collect()
    }
}

/// Default listing document (`storage#objects`), used when the client sent
/// no field selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListObjectsResponse {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ObjectResponse>,
}

impl ListObjectsResponse {
    pub fn new(objects: &[Object], prefixes: &[String]) -> Self {
        Self {
            kind: OBJECTS_KIND.into(),
            prefixes: prefixes.to_vec(),
            items: objects.iter().map(ObjectResponse::from).collect(),
        }
    }
}

/// JSON representation of a bucket (`storage#bucket`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketResponse {
    pub kind: String,
    pub id: String,
    pub name: String,
}

impl BucketResponse {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: BUCKET_KIND.into(),
            id: name.clone(),
            name,
        }
    }
}

/// Bucket listing document (`storage#buckets`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBucketsResponse {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<BucketResponse>,
}

impl ListBucketsResponse {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: BUCKETS_KIND.into(),
            items: names.into_iter().map(BucketResponse::new).collect(),
        }
    }
}
