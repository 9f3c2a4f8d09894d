use tracing::instrument;

use crate::store::{PostDocument, PostStore, StoreError};

/// The fixed set of posts the store holds after startup.
pub fn seed_posts() -> Vec<PostDocument> {
    vec![
        PostDocument::new(1, "First post", "first-post"),
        PostDocument::new(2, "Second post", "second-post"),
        PostDocument::new(3, "Third post", "third-post"),
    ]
}

/// Removes every document from the store.
#[instrument(skip(store))]
pub async fn cleanup(store: &dyn PostStore) -> Result<(), StoreError> {
    tracing::info!("cleaning up post collection");
    let deleted = store.delete_all().await?;
    tracing::debug!("deleted {} documents", deleted);
    Ok(())
}

/// Clears the store and inserts the fixed posts. Running it again leaves the
/// same three documents behind. Any error is returned as is; the caller is
/// expected to treat it as fatal.
#[instrument(skip(store))]
pub async fn seed(store: &dyn PostStore) -> Result<(), StoreError> {
    tracing::info!("seeding mock data");
    cleanup(store).await?;
    store.insert_many(&seed_posts()).await?;
    tracing::info!("mock data added successfully");
    Ok(())
}
