use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checksum::{crc32c_base64, md5_base64};

/// Content type assigned when the uploader does not supply one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A stored object: content plus everything the API reports about it.
///
/// Checksums and the etag are derived from `content` when the object is
/// built with [`Object::new`]. The store hands out clones; nothing in the
/// response path mutates an `Object`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Name of the owning bucket.
    pub bucket_name: String,
    /// Object name (may contain `/`).
    pub name: String,
    /// Raw content bytes.
    pub content: Vec<u8>,
    pub content_type: String,
    /// Empty when the content is stored unencoded.
    pub content_encoding: String,
    /// Base64 of the big-endian CRC32C of `content`.
    pub crc32c: String,
    /// Base64 of the MD5 digest of `content`.
    pub md5_hash: String,
    pub etag: String,
    pub acl: Vec<AclRule>,
    pub metadata: BTreeMap<String, String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Set only for soft-deleted objects.
    pub deleted: Option<DateTime<Utc>>,
    pub generation: i64,
}

impl Object {
    /// Build an object from its content, stamped with the current time.
    ///
    /// The generation is the creation time in microseconds since the epoch.
    pub fn new(
        bucket_name: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        let content = content.into();
        let now = Utc::now();
        let md5_hash = md5_base64(&content);
        Self {
            bucket_name: bucket_name.into(),
            name: name.into(),
            crc32c: crc32c_base64(&content),
            etag: md5_hash.clone(),
            md5_hash,
            content,
            content_type: DEFAULT_CONTENT_TYPE.into(),
            content_encoding: String::new(),
            acl: Vec::new(),
            metadata: BTreeMap::new(),
            created: now,
            updated: now,
            deleted: None,
            generation: now.timestamp_micros(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_content_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.content_encoding = encoding.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_acl(mut self, rule: AclRule) -> Self {
        self.acl.push(rule);
        self
    }

    pub fn with_generation(mut self, generation: i64) -> Self {
        self.generation = generation;
        self
    }

    /// Override both creation and update times.
    pub fn with_timestamps(mut self, created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        self.created = created;
        self.updated = updated;
        self
    }

    pub fn with_deleted(mut self, deleted: DateTime<Utc>) -> Self {
        self.deleted = Some(deleted);
        self
    }

    /// Content length in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// The resource identifier, `{bucket}/{name}`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.bucket_name, self.name)
    }
}

/// Permission level granted by an [`AclRule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AclRole {
    Owner,
    Writer,
    Reader,
}

impl fmt::Display for AclRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Owner => "OWNER",
            Self::Writer => "WRITER",
            Self::Reader => "READER",
        };
        f.write_str(s)
    }
}

/// A single access-control entry, e.g. `allUsers` / `READER`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRule {
    pub entity: String,
    pub role: AclRole,
}

impl AclRule {
    pub fn new(entity: impl Into<String>, role: AclRole) -> Self {
        Self {
            entity: entity.into(),
            role,
        }
    }
}
