use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PostDocument, PostStore, StoreError};

/// Keeps documents in insertion order, so lookups behave like a cursor over
/// the collection in natural order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<PostDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<PostDocument> {
        self.posts.read().await.clone()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostDocument>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.slug == slug).cloned())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut posts = self.posts.write().await;
        let deleted = posts.len() as u64;
        posts.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, new_posts: &[PostDocument]) -> Result<(), StoreError> {
        self.posts.write().await.extend_from_slice(new_posts);
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
