use async_graphql::{Request, Variables};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use super::{context::ServerContext, errors::HandlerError};

/// Body of a GraphQL request. Only `query` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLParams {
    pub query: String,
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

impl From<GraphQLParams> for Request {
    fn from(params: GraphQLParams) -> Self {
        let mut request = Request::new(params.query);
        if let Some(name) = params.operation_name {
            request = request.operation_name(name);
        }
        if let Some(variables) = params.variables {
            request = request.variables(Variables::from_json(Value::Object(variables)));
        }
        request
    }
}

#[instrument(skip_all)]
pub async fn graphql_handler(
    State(state): State<ServerContext>,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError> {
    // Decode by hand so a bad body is answered with the decoder's message.
    let params: GraphQLParams =
        serde_json::from_slice(&body).map_err(HandlerError::MalformedRequest)?;
    let response = state.schema.execute(Request::from(params)).await;
    let json = serde_json::to_vec(&response).map_err(HandlerError::Serialization)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    ))
}
