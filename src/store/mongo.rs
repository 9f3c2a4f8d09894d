use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use tracing::instrument;

use super::{PostDocument, PostStore, StoreError};
use crate::config::DatabaseConfig;

/// MongoDB backed store. Every operation opens a fresh client; nothing is
/// pooled or reused between calls.
#[derive(Clone, Debug)]
pub struct MongoStore {
    config: DatabaseConfig,
}

impl MongoStore {
    pub fn new(config: DatabaseConfig) -> Self {
        MongoStore { config }
    }

    async fn client(&self) -> Result<Client, StoreError> {
        let client = Client::with_uri_str(self.config.uri()).await?;
        tracing::debug!(
            "opened connection to {} as user {}",
            self.config.host,
            self.config.user
        );
        Ok(client)
    }

    async fn collection(&self) -> Result<Collection<PostDocument>, StoreError> {
        Ok(self
            .client()
            .await?
            .database(&self.config.database_name)
            .collection(&self.config.collection_name))
    }
}

#[async_trait]
impl PostStore for MongoStore {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostDocument>, StoreError> {
        let collection = self.collection().await?;
        let mut cursor = collection.find(doc! { "slug": slug }, None).await?;
        // Only the first document counts, the cursor is dropped afterwards.
        Ok(cursor.try_next().await?)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, StoreError> {
        let collection = self.collection().await?;
        let result = collection.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }

    #[instrument(skip(self, posts), fields(count = posts.len()))]
    async fn insert_many(&self, posts: &[PostDocument]) -> Result<(), StoreError> {
        let collection = self.collection().await?;
        collection.insert_many(posts, None).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let collection = self.collection().await?;
        Ok(collection.count_documents(doc! {}, None).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client()
            .await?
            .database(&self.config.database_name)
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}
