//! HTTP server for the gcsim storage emulator.
//!
//! Serves the `storage/v1` JSON API over an in-memory [`BucketStore`]:
//! bucket creation, media uploads, object reads and deletes, and object
//! listings that honor the `fields` partial-response parameter.
//!
//! [`BucketStore`]: gcsim_store::BucketStore

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::GcsimServer;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use gcsim_store::{BucketStore, InMemoryBucketStore};
    use gcsim_types::Object;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        let store = InMemoryBucketStore::new();
        store.create_bucket("bucket").unwrap();
        for (name, content) in [
            ("a.txt", "alpha"),
            ("dir/one.txt", "one"),
            ("dir/two.txt", "two"),
        ] {
            store
                .put_object(Object::new("bucket", name, content.as_bytes().to_vec()))
                .unwrap();
        }
        GcsimServer::with_store(ServerConfig::default(), Arc::new(store)).router()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    // -----------------------------------------------------------------------
    // Health and buckets
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = get(&app(), "/health").await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn create_and_list_buckets() {
        let app = app();
        let request = Request::builder()
            .method("POST")
            .uri("/storage/v1/b")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"other-bucket"}"#))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, 200);
        assert_eq!(body["kind"], "storage#bucket");

        let (_, body) = get(&app, "/storage/v1/b").await;
        let names: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["bucket", "other-bucket"]);
    }

    #[tokio::test]
    async fn duplicate_bucket_conflicts() {
        let request = Request::builder()
            .method("POST")
            .uri("/storage/v1/b")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"bucket"}"#))
            .unwrap();
        let (status, body) = send(&app(), request).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], 409);
    }

    // -----------------------------------------------------------------------
    // Listing with and without field selection
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn default_listing_is_full() {
        let (status, body) = get(&app(), "/storage/v1/b/bucket/o").await;
        assert_eq!(status, 200);
        assert_eq!(body["kind"], "storage#objects");
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "a.txt");
        assert_eq!(items[0]["size"], "5");
        assert!(body.get("prefixes").is_none());
    }

    #[tokio::test]
    async fn listing_with_delimiter_reports_prefixes() {
        let (_, body) = get(&app(), "/storage/v1/b/bucket/o?delimiter=/").await;
        assert_eq!(body["prefixes"], json!(["dir/"]));
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_item_fields() {
        let (status, body) =
            get(&app(), "/storage/v1/b/bucket/o?prefix=dir/&fields=items(name)").await;
        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({ "items": [{ "name": "dir/one.txt" }, { "name": "dir/two.txt" }] })
        );
    }

    #[tokio::test]
    async fn kind_and_prefixes_only() {
        let (_, body) =
            get(&app(), "/storage/v1/b/bucket/o?delimiter=/&fields=kind,prefixes").await;
        assert_eq!(body, json!({ "kind": "storage#objects", "prefixes": ["dir/"] }));
    }

    #[tokio::test]
    async fn page_token_is_ignored() {
        let (status, body) = get(&app(), "/storage/v1/b/bucket/o?fields=nextPageToken,kind").await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "kind": "storage#objects" }));
    }

    #[tokio::test]
    async fn invalid_fields_is_bad_request() {
        let (status, body) = get(&app(), "/storage/v1/b/bucket/o?fields=kind,invalid-field").await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], 400);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("invalid-field"), "{message}");
    }

    #[tokio::test]
    async fn invalid_fields_wins_over_missing_bucket() {
        let (status, _) = get(&app(), "/storage/v1/b/ghost/o?fields=bogus").await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn listing_missing_bucket_is_not_found() {
        let (status, _) = get(&app(), "/storage/v1/b/ghost/o").await;
        assert_eq!(status, 404);
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_nested_object() {
        let (status, body) = get(&app(), "/storage/v1/b/bucket/o/dir/one.txt").await;
        assert_eq!(status, 200);
        assert_eq!(body["id"], "bucket/dir/one.txt");
        assert_eq!(body["kind"], "storage#object");
    }

    #[tokio::test]
    async fn get_missing_object_is_not_found() {
        let (status, body) = get(&app(), "/storage/v1/b/bucket/o/nope").await;
        assert_eq!(status, 404);
        assert!(body["error"]["message"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn upload_then_list() {
        let app = app();
        let request = Request::builder()
            .method("POST")
            .uri("/upload/storage/v1/b/bucket/o?uploadType=media&name=new.txt")
            .header("content-type", "text/plain")
            .body(Body::from("hello world"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, 200);
        assert_eq!(body["contentType"], "text/plain");
        assert_eq!(body["md5Hash"], "XrY7u+Ae7tCTyyK7j1rNww==");
        assert_eq!(body["crc32c"], "yZRlqg==");

        let (_, listing) =
            get(&app, "/storage/v1/b/bucket/o?fields=items(name,size)&prefix=new").await;
        assert_eq!(listing, json!({ "items": [{ "name": "new.txt", "size": "11" }] }));
    }

    #[tokio::test]
    async fn upload_requires_name() {
        let request = Request::builder()
            .method("POST")
            .uri("/upload/storage/v1/b/bucket/o?uploadType=media")
            .body(Body::from("x"))
            .unwrap();
        let (status, _) = send(&app(), request).await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn upload_rejects_other_upload_types() {
        let request = Request::builder()
            .method("POST")
            .uri("/upload/storage/v1/b/bucket/o?uploadType=resumable&name=x")
            .body(Body::from("x"))
            .unwrap();
        let (status, body) = send(&app(), request).await;
        assert_eq!(status, 400);
        assert!(body["error"]["message"].as_str().unwrap().contains("resumable"));
    }

    #[tokio::test]
    async fn delete_object() {
        let app = app();
        let request = Request::builder()
            .method("DELETE")
            .uri("/storage/v1/b/bucket/o/a.txt")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = get(&app, "/storage/v1/b/bucket/o/a.txt").await;
        assert_eq!(status, 404);
    }
}
