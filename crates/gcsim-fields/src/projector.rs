use gcsim_types::{ListObjectsResponse, Object, ObjectResponse, OBJECTS_KIND};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::registry::TopLevelField;
use crate::selection::Selection;

/// A listing response, either the default document or a projection of it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseDocument {
    /// No selection was given; every attribute of every object.
    Full(ListObjectsResponse),
    /// Only the selected keys.
    Partial(PartialListing),
}

/// Listing envelope restricted to the requested keys.
///
/// A key that was not requested is absent from the output, never `null`
/// or empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PartialListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<PartialItems>,
}

/// The `items` value of a [`PartialListing`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PartialItems {
    /// Bare `items`: full object representations.
    Full(Vec<ObjectResponse>),
    /// `items(...)`: one map per object holding exactly the selected fields.
    Fields(Vec<Map<String, Value>>),
}

/// Project a listing down to `selection`.
///
/// Objects keep their input order. An empty selection yields the default
/// listing document unchanged.
pub fn project(selection: &Selection, prefixes: &[String], objects: &[Object]) -> ResponseDocument {
    if selection.is_empty() {
        return ResponseDocument::Full(ListObjectsResponse::new(objects, prefixes));
    }

    let mut listing = PartialListing::default();
    if selection.contains(TopLevelField::Kind) {
        listing.kind = Some(OBJECTS_KIND);
    }
    if selection.contains(TopLevelField::Prefixes) {
        listing.prefixes = Some(prefixes.to_vec());
    }
    if selection.contains(TopLevelField::Items) {
        listing.items = Some(PartialItems::Full(
            objects.iter().map(ObjectResponse::from).collect(),
        ));
    } else if !selection.item_fields().is_empty() && !objects.is_empty() {
        listing.items = Some(PartialItems::Fields(
            objects.iter().map(|obj| select_item(selection, obj)).collect(),
        ));
    }

    ResponseDocument::Partial(listing)
}

fn select_item(selection: &Selection, obj: &Object) -> Map<String, Value> {
    selection
        .item_fields()
        .iter()
        .map(|field| (field.as_str().to_string(), field.extract(obj)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::registry::ItemField;
    use chrono::{TimeZone, Utc};
    use gcsim_types::{AclRole, AclRule};
    use serde_json::json;

    fn objects() -> Vec<Object> {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        vec![
            Object::new("bucket", "a.txt", b"alpha".to_vec())
                .with_timestamps(ts, ts)
                .with_generation(1),
            Object::new("bucket", "b.txt", b"beta".to_vec())
                .with_content_type("text/plain")
                .with_timestamps(ts, ts)
                .with_generation(2),
            Object::new("bucket", "c.bin", b"gamma".to_vec())
                .with_content_encoding("gzip")
                .with_metadata("k", "v")
                .with_acl(AclRule::new("allUsers", AclRole::Reader))
                .with_timestamps(ts, ts)
                .with_deleted(ts)
                .with_generation(3),
        ]
    }

    fn prefixes() -> Vec<String> {
        vec!["logs/".to_string(), "tmp/".to_string()]
    }

    fn render(fields: &str, prefixes: &[String], objects: &[Object]) -> Value {
        let selection = parse(fields).unwrap();
        serde_json::to_value(project(&selection, prefixes, objects)).unwrap()
    }

    #[test]
    fn empty_selection_is_the_default_listing() {
        let objs = objects();
        let doc = project(&Selection::default(), &prefixes(), &objs);
        assert_eq!(
            doc,
            ResponseDocument::Full(ListObjectsResponse::new(&objs, &prefixes()))
        );
    }

    #[test]
    fn kind_only() {
        let out = render("kind", &prefixes(), &objects());
        assert_eq!(out, json!({ "kind": "storage#objects" }));
    }

    #[test]
    fn prefixes_are_verbatim() {
        let out = render("prefixes", &prefixes(), &objects());
        assert_eq!(out, json!({ "prefixes": ["logs/", "tmp/"] }));
    }

    #[test]
    fn requested_prefixes_are_emitted_even_when_empty() {
        let out = render("prefixes", &[], &objects());
        assert_eq!(out, json!({ "prefixes": [] }));
    }

    #[test]
    fn items_key_omitted_when_not_requested() {
        let out = render("kind,prefixes", &prefixes(), &objects());
        assert!(out.get("items").is_none());
        let out = render("kind,items()", &prefixes(), &objects());
        assert!(out.get("items").is_none());
    }

    #[test]
    fn full_items_match_default_listing() {
        let objs = objects();
        let out = render("items", &prefixes(), &objs);
        let default = serde_json::to_value(ListObjectsResponse::new(&objs, &prefixes())).unwrap();
        assert_eq!(out["items"].as_array().unwrap().len(), objs.len());
        assert_eq!(out["items"], default["items"]);
        assert!(out.get("kind").is_none());
    }

    #[test]
    fn full_items_preserve_order() {
        let out = render("items", &[], &objects());
        let names: Vec<&str> = out["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.bin"]);
    }

    #[test]
    fn partial_items_hold_exactly_the_requested_keys() {
        let out = render("items(name,size)", &prefixes(), &objects());
        assert_eq!(
            out,
            json!({
                "items": [
                    { "name": "a.txt", "size": "5" },
                    { "name": "b.txt", "size": "4" },
                    { "name": "c.bin", "size": "5" },
                ]
            })
        );
    }

    #[test]
    fn partial_item_keys_follow_request_order() {
        let out = render("items(size,name,bucket)", &[], &objects());
        let keys: Vec<&str> = out["items"][0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["size", "name", "bucket"]);
    }

    #[test]
    fn envelope_combines_with_partial_items() {
        let out = render("kind,prefixes,items(name)", &prefixes(), &objects());
        assert_eq!(out["kind"], "storage#objects");
        assert_eq!(out["prefixes"], json!(["logs/", "tmp/"]));
        assert_eq!(out["items"][2], json!({ "name": "c.bin" }));
    }

    #[test]
    fn partial_items_omitted_for_empty_listing() {
        let out = render("kind,items(name)", &[], &[]);
        assert_eq!(out, json!({ "kind": "storage#objects" }));
    }

    #[test]
    fn bare_items_wins_over_groups() {
        let objs = objects();
        let out = render("items(name),items", &[], &objs);
        assert_eq!(out["items"][0]["md5Hash"], objs[0].md5_hash.as_str());
    }

    #[test]
    fn every_field_round_trips_against_full_representation() {
        for obj in objects() {
            let full = serde_json::to_value(ObjectResponse::from(&obj)).unwrap();
            for field in ItemField::ALL {
                let name = field.as_str();
                let out = render(&format!("items({name})"), &[], std::slice::from_ref(&obj));
                let partial = &out["items"][0];
                assert_eq!(partial.as_object().unwrap().len(), 1);
                let expected = full.get(name).cloned().unwrap_or(Value::Null);
                assert_eq!(partial[name], expected, "{} on {}", name, obj.name);
            }
        }
    }
}
