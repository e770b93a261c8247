use attractions_shared::{AttractionsError, ErrorBody};
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

/// Failure of an API handler, rendered as `{"detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] AttractionsError),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(err) => match err {
                AttractionsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                AttractionsError::Upstream { .. } | AttractionsError::Http(_) => StatusCode::BAD_GATEWAY,
                AttractionsError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                AttractionsError::Config(_) | AttractionsError::Serialization(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Query(rejection) => rejection.body_text(),
            ApiError::Service(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
