use std::fmt;

use serde::Serialize;

use crate::registry::{ItemField, TopLevelField};

/// A parsed, validated field selection.
///
/// - `top_level_fields` behaves as a set: inserting a field twice keeps one.
/// - `item_fields` keeps request order and tolerates repeats.
/// - If `top_level_fields` holds [`TopLevelField::Items`], `item_fields` is
///   empty: a bare `items` always beats `items(...)` groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    top_level_fields: Vec<TopLevelField>,
    item_fields: Vec<ItemField>,
}

impl Selection {
    /// Build a selection from parts, enforcing the `items` precedence rule.
    pub fn from_parts(
        top_level_fields: impl IntoIterator<Item = TopLevelField>,
        item_fields: impl IntoIterator<Item = ItemField>,
    ) -> Self {
        let mut selection = Self::default();
        for field in top_level_fields {
            selection.insert_top_level(field);
        }
        selection.item_fields.extend(item_fields);
        selection.normalize();
        selection
    }

    pub fn top_level_fields(&self) -> &[TopLevelField] {
        &self.top_level_fields
    }

    pub fn item_fields(&self) -> &[ItemField] {
        &self.item_fields
    }

    pub fn contains(&self, field: TopLevelField) -> bool {
        self.top_level_fields.contains(&field)
    }

    /// `true` when nothing was selected, i.e. the default response applies.
    pub fn is_empty(&self) -> bool {
        self.top_level_fields.is_empty() && self.item_fields.is_empty()
    }

    pub(crate) fn insert_top_level(&mut self, field: TopLevelField) {
        if !self.contains(field) {
            self.top_level_fields.push(field);
        }
    }

    pub(crate) fn push_item_field(&mut self, field: ItemField) {
        self.item_fields.push(field);
    }

    pub(crate) fn normalize(&mut self) {
        if self.contains(TopLevelField::Items) {
            self.item_fields.clear();
        }
    }
}

/// Renders the canonical expression, e.g. `kind,items(name,size)`.
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .top_level_fields
            .iter()
            .map(|field| field.as_str().to_string())
            .collect();
        if !self.item_fields.is_empty() {
            let names: Vec<&str> = self.item_fields.iter().map(|f| f.as_str()).collect();
            parts.push(format!("items({})", names.join(",")));
        }
        f.write_str(&parts.join(","))
    }
}
