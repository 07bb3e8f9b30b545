use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("MalformedBody: {message}")]
    MalformedBody { message: String },
    #[error("InvalidQuery: {message}")]
    InvalidQuery { message: String },
    #[error("InvalidField: {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("NotFound: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error("BlockingTask: {source}")]
    BlockingTask {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Query: {source}")]
    Query {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EndpointError {
    pub fn query<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Query { source: Box::new(source) }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::InvalidField { field, message: "is required".to_string() }
    }

    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            EndpointError::MalformedBody { .. }
            | EndpointError::InvalidQuery { .. }
            | EndpointError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            EndpointError::NotFound { .. } => StatusCode::NOT_FOUND,
            EndpointError::GetConnectionFromPool { .. }
            | EndpointError::BlockingTask { .. }
            | EndpointError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let errors = [
            EndpointError::MalformedBody { message: "not an object".to_string() },
            EndpointError::InvalidQuery { message: "limit".to_string() },
            EndpointError::missing_field("name"),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_rows_map_to_not_found() {
        let err = EndpointError::not_found("article", 9);
        assert_eq!(err.to_string(), "NotFound: article 9");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_map_to_internal_error() {
        let err = EndpointError::query(diesel::result::Error::NotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
