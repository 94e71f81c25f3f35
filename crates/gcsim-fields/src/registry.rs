//! The field registry: every name a `fields` expression may mention.
//!
//! Item fields are a closed enum whose wire names match the keys of
//! [`ObjectResponse`](gcsim_types::ObjectResponse) one for one. Each variant
//! knows how to read its value off an [`Object`], using the same formatters
//! as the full representation so partial and full responses agree.

use std::fmt;
use std::str::FromStr;

use gcsim_types::{format_timestamp, AccessControlResponse, Object, OBJECT_KIND};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::FieldsError;

/// Token clients send alongside real fields; accepted and ignored.
pub const NEXT_PAGE_TOKEN: &str = "nextPageToken";

/// A key of the listing envelope itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopLevelField {
    Kind,
    Prefixes,
    Items,
}

impl TopLevelField {
    pub const ALL: [TopLevelField; 3] = [Self::Kind, Self::Prefixes, Self::Items];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::Prefixes => "prefixes",
            Self::Items => "items",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

/// An attribute of a listed object, selectable through `items(...)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemField {
    Kind,
    Id,
    Name,
    Bucket,
    Size,
    ContentType,
    ContentEncoding,
    Crc32c,
    Md5Hash,
    Etag,
    Acl,
    Metadata,
    TimeCreated,
    TimeDeleted,
    Updated,
    Generation,
}

impl ItemField {
    /// Every registered item field, in full-representation key order.
    pub const ALL: [ItemField; 16] = [
        Self::Kind,
        Self::Id,
        Self::Name,
        Self::Bucket,
        Self::Size,
        Self::ContentType,
        Self::ContentEncoding,
        Self::Crc32c,
        Self::Md5Hash,
        Self::Etag,
        Self::Acl,
        Self::Metadata,
        Self::TimeCreated,
        Self::TimeDeleted,
        Self::Updated,
        Self::Generation,
    ];

    /// Wire name, as it appears in `items(...)` and in response keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::Id => "id",
            Self::Name => "name",
            Self::Bucket => "bucket",
            Self::Size => "size",
            Self::ContentType => "contentType",
            Self::ContentEncoding => "contentEncoding",
            Self::Crc32c => "crc32c",
            Self::Md5Hash => "md5Hash",
            Self::Etag => "etag",
            Self::Acl => "acl",
            Self::Metadata => "metadata",
            Self::TimeCreated => "timeCreated",
            Self::TimeDeleted => "timeDeleted",
            Self::Updated => "updated",
            Self::Generation => "generation",
        }
    }

    /// Look up a wire name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Read this field's value from `obj`.
    ///
    /// Attributes the full representation omits when unset
    /// (`contentEncoding`, `metadata`, `timeDeleted`) yield `null`.
    pub fn extract(self, obj: &Object) -> Value {
        match self {
            Self::Kind => Value::from(OBJECT_KIND),
            Self::Id => Value::from(obj.id()),
            Self::Name => Value::from(obj.name.as_str()),
            Self::Bucket => Value::from(obj.bucket_name.as_str()),
            Self::Size => Value::from(obj.size().to_string()),
            Self::ContentType => Value::from(obj.content_type.as_str()),
            Self::ContentEncoding if obj.content_encoding.is_empty() => Value::Null,
            Self::ContentEncoding => Value::from(obj.content_encoding.as_str()),
            Self::Crc32c => Value::from(obj.crc32c.as_str()),
            Self::Md5Hash => Value::from(obj.md5_hash.as_str()),
            Self::Etag => Value::from(obj.etag.as_str()),
            Self::Acl => Value::Array(
                AccessControlResponse::for_object(obj)
                    .iter()
                    .map(acl_entry)
                    .collect(),
            ),
            Self::Metadata if obj.metadata.is_empty() => Value::Null,
            Self::Metadata => Value::Object(
                obj.metadata
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                    .collect(),
            ),
            Self::TimeCreated => Value::from(format_timestamp(&obj.created)),
            Self::TimeDeleted => obj
                .deleted
                .as_ref()
                .map_or(Value::Null, |ts| Value::from(format_timestamp(ts))),
            Self::Updated => Value::from(format_timestamp(&obj.updated)),
            Self::Generation => Value::from(obj.generation.to_string()),
        }
    }
}

fn acl_entry(entry: &AccessControlResponse) -> Value {
    let mut map = Map::new();
    map.insert("bucket".into(), Value::from(entry.bucket.as_str()));
    map.insert("object".into(), Value::from(entry.object.as_str()));
    map.insert("entity".into(), Value::from(entry.entity.as_str()));
    map.insert("role".into(), Value::from(entry.role.to_string()));
    Value::Object(map)
}

impl fmt::Display for TopLevelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopLevelField {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FieldsError::InvalidField(s.to_string()))
    }
}

impl FromStr for ItemField {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FieldsError::InvalidField(s.to_string()))
    }
}

impl Serialize for TopLevelField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for ItemField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
