use std::collections::BTreeSet;

use gcsim_types::Object;

/// Filters applied to an object listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only objects whose name starts with this string are listed.
    pub prefix: Option<String>,
    /// Names containing the delimiter past the prefix collapse into a prefix.
    pub delimiter: Option<String>,
}

impl ListOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }
}

/// Result of listing a bucket: matching objects plus collapsed prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Sorted by name.
    pub objects: Vec<Object>,
    /// Sorted and unique.
    pub prefixes: Vec<String>,
}

/// Apply `options` to `objects`, which must already be sorted by name.
///
/// With a delimiter, an object `photos/2024/cat.png` listed under prefix
/// `photos/` is replaced by the prefix `photos/2024/`.
pub fn fold_listing<'a>(
    objects: impl IntoIterator<Item = &'a Object>,
    options: &ListOptions,
) -> Listing {
    let prefix = options.prefix.as_deref().unwrap_or("");
    let delimiter = options.delimiter.as_deref().filter(|d| !d.is_empty());

    let mut listing = Listing::default();
    let mut prefixes = BTreeSet::new();
    for obj in objects {
        let Some(rest) = obj.name.strip_prefix(prefix) else {
            continue;
        };
        match delimiter.and_then(|d| rest.find(d).map(|at| at + d.len())) {
            Some(end) => {
                prefixes.insert(format!("{prefix}{}", &rest[..end]));
            }
            None => listing.objects.push(obj.clone()),
        }
    }
    listing.prefixes = prefixes.into_iter().collect();
    listing
}
