use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::handlers::ServerContext;
use crate::schema::build_schema;
use crate::seed::seed;
use crate::store::{MemoryStore, PostDocument, PostStore, SharedStore, StoreError};

/// Store whose every operation fails, standing in for an unreachable
/// database.
pub struct FailingStore;

#[async_trait]
impl PostStore for FailingStore {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<PostDocument>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert_many(&self, _posts: &[PostDocument]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub async fn seeded_store() -> SharedStore {
    let store = MemoryStore::new();
    seed(&store).await.expect("seeding an in-memory store");
    Arc::new(store)
}

pub fn context_for(store: SharedStore) -> ServerContext {
    ServerContext::new(build_schema(store.clone()), store)
}

pub async fn seeded_context() -> ServerContext {
    context_for(seeded_store().await)
}

/// Sends `body` as a POST to `uri` and returns the status, content type and
/// raw body of the response.
pub async fn post(router: Router, uri: &str, body: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, content_type, bytes.to_vec())
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, bytes.to_vec())
}
