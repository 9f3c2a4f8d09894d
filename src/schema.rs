use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, ID};

use crate::store::{PostDocument, SharedStore};

pub type PostSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the immutable schema once. The store is attached as schema data
/// and used by every resolver call.
pub fn build_schema(store: SharedStore) -> PostSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}

/// The entry points of the API.
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Looks up a post by its slug. Store failures are logged and resolve to
    /// `null`, the same as an unknown slug.
    async fn post(&self, ctx: &Context<'_>, slug: String) -> async_graphql::Result<Option<Post>> {
        let store = ctx.data::<SharedStore>()?;
        match store.find_by_slug(&slug).await {
            Ok(document) => Ok(document.map(Post)),
            Err(e) => {
                tracing::error!("failed to look up post {:?}: {}", slug, e);
                Ok(None)
            }
        }
    }
}

pub struct Post(PostDocument);

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn slug(&self) -> &str {
        &self.0.slug
    }

    async fn title(&self) -> &str {
        &self.0.title
    }
}
