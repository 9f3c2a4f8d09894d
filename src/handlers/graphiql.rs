use async_graphql::http::GraphiQLSource;
use axum::response::{Html, IntoResponse};
use tracing::instrument;

use super::GRAPHQL_PATH;

/// Serves the GraphiQL IDE, wired to post its queries back to this server.
#[instrument]
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
