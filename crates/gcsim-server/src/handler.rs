use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use bytes::Bytes;
use gcsim_fields::{parse, project, ResponseDocument, Selection};
use gcsim_store::{BucketStore, ListOptions};
use gcsim_types::{BucketResponse, ListBucketsResponse, Object, ObjectResponse};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BucketStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BucketStore>) -> Self {
        Self { store }
    }
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

#[derive(Debug, Deserialize)]
pub struct CreateBucketRequest {
    pub name: String,
}

pub async fn list_buckets_handler(
    State(state): State<AppState>,
) -> ServerResult<Json<ListBucketsResponse>> {
    Ok(Json(ListBucketsResponse::new(state.store.list_buckets()?)))
}

pub async fn create_bucket_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateBucketRequest>,
) -> ServerResult<Json<BucketResponse>> {
    state.store.create_bucket(&request.name)?;
    tracing::info!(bucket = %request.name, "bucket created");
    Ok(Json(BucketResponse::new(request.name)))
}

/// Query parameters of an object listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListObjectsQuery {
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    /// Partial-response selection, e.g. `kind,items(name,size)`.
    pub fields: Option<String>,
}

/// List a bucket, narrowed to the `fields` selection when one is given.
///
/// The selection is validated before the store is consulted.
pub async fn list_objects_handler(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    Query(query): Query<ListObjectsQuery>,
) -> ServerResult<Json<ResponseDocument>> {
    let selection = match query.fields.as_deref() {
        Some(fields) => parse(fields)?,
        None => Selection::default(),
    };
    let options = ListOptions {
        prefix: query.prefix,
        delimiter: query.delimiter,
    };
    let listing = state.store.list_objects(&bucket, &options)?;
    Ok(Json(project(&selection, &listing.prefixes, &listing.objects)))
}

pub async fn get_object_handler(
    State(state): State<AppState>,
    Path((bucket, object)): Path<(String, String)>,
) -> ServerResult<Json<ObjectResponse>> {
    let obj = state.store.get_object(&bucket, &object)?;
    Ok(Json(ObjectResponse::from(&obj)))
}

pub async fn delete_object_handler(
    State(state): State<AppState>,
    Path((bucket, object)): Path<(String, String)>,
) -> ServerResult<StatusCode> {
    state.store.delete_object(&bucket, &object)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters of a simple media upload.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    #[serde(rename = "uploadType")]
    pub upload_type: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "contentEncoding")]
    pub content_encoding: Option<String>,
}

/// Store the request body as an object (`uploadType=media`).
pub async fn upload_object_handler(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Json<ObjectResponse>> {
    match query.upload_type.as_deref() {
        None | Some("media") => {}
        Some(other) => {
            return Err(ServerError::BadRequest(format!(
                "unsupported uploadType: {other}"
            )));
        }
    }
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing object name".into()))?;

    let mut obj = Object::new(bucket, name, body.to_vec());
    if let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        obj = obj.with_content_type(content_type);
    }
    if let Some(encoding) = query.content_encoding {
        obj = obj.with_content_encoding(encoding);
    }

    let response = ObjectResponse::from(&obj);
    state.store.put_object(obj)?;
    tracing::info!(bucket = %response.bucket, object = %response.name, "object uploaded");
    Ok(Json(response))
}
