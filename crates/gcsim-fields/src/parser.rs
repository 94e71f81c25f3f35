//! Parser for the `fields` query parameter.
//!
//! Grammar (whitespace around tokens is insignificant):
//!
//! ```text
//! fields := token ("," token)*
//! token  := "kind" | "prefixes" | "items" | "nextPageToken" | ""
//!         | "items(" name ("," name)* ")"
//! ```
//!
//! `items(...)` groups may repeat; their names are concatenated. A bare
//! `items` anywhere in the expression overrides every group.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FieldsError, FieldsResult};
use crate::registry::{ItemField, TopLevelField, NEXT_PAGE_TOKEN};
use crate::selection::Selection;

static ITEMS_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bitems\(([^)]*)\)").expect("items group pattern is valid"));

/// Parse and validate a field-selection expression.
///
/// All `items(...)` groups are validated before the remaining top-level
/// tokens, so an unknown item name is reported ahead of an unknown
/// top-level token. The first unknown name ends the parse.
///
/// # Examples
///
/// ```
/// use gcsim_fields::{parse, ItemField, TopLevelField};
///
/// let selection = parse("kind, items(name,size)").unwrap();
/// assert_eq!(selection.top_level_fields(), &[TopLevelField::Kind]);
/// assert_eq!(selection.item_fields(), &[ItemField::Name, ItemField::Size]);
///
/// assert!(parse("items(nope)").is_err());
/// ```
pub fn parse(input: &str) -> FieldsResult<Selection> {
    let mut selection = Selection::default();

    for captures in ITEMS_GROUP.captures_iter(input) {
        let group = captures.get(1).map_or("", |m| m.as_str());
        for name in group.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let field = ItemField::from_name(name)
                .ok_or_else(|| FieldsError::InvalidField(name.to_string()))?;
            selection.push_item_field(field);
        }
    }

    let residual = ITEMS_GROUP.replace_all(input, "");
    for token in residual.split(',').map(str::trim) {
        if token.is_empty() || token == NEXT_PAGE_TOKEN {
            continue;
        }
        let field = TopLevelField::from_name(token)
            .ok_or_else(|| FieldsError::InvalidField(token.to_string()))?;
        selection.insert_top_level(field);
    }

    selection.normalize();
    tracing::debug!(fields = input, selection = %selection, "parsed field selection");
    Ok(selection)
}
