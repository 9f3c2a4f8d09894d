use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod memory;
pub use memory::MemoryStore;

mod mongo;
pub use mongo::MongoStore;

/// A post as it is stored in the collection: `{ID: int32, title, slug}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "ID")]
    pub id: i32,
    pub title: String,
    pub slug: String,
}

impl PostDocument {
    pub fn new(id: i32, title: &str, slug: &str) -> Self {
        PostDocument {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Access to the post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Returns the first document whose slug equals `slug`. Any further
    /// matches are ignored.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostDocument>, StoreError>;

    /// Removes every document from the collection and returns how many were
    /// deleted.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    async fn insert_many(&self, posts: &[PostDocument]) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn PostStore>;
