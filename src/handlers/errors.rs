use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    MalformedRequest(serde_json::Error),
    #[error("{0}")]
    Serialization(serde_json::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            HandlerError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_request_is_client_error() {
        let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = HandlerError::MalformedRequest(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn serialization_failure_is_server_error() {
        let error = serde_json::from_str::<serde_json::Value>("]").unwrap_err();
        let response = HandlerError::Serialization(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
