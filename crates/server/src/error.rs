use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lede_core::{ErrorCode, LedeError};
use serde::Serialize;

/// Failure of an API request, rendered as `{"error": {code, message, details}}`.
#[derive(Debug)]
pub enum ApiError {
    /// Neither a URL nor HTML was supplied, or the body wasn't JSON.
    UrlRequired(Option<String>),
    Extraction(LedeError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: ErrorCode,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UrlRequired(_) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(err) => match err {
                LedeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                LedeError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
                LedeError::NetworkError(_) => StatusCode::BAD_GATEWAY,
                LedeError::UpstreamHttpError { status } if *status >= 500 => StatusCode::BAD_GATEWAY,
                LedeError::UpstreamHttpError { .. } => StatusCode::BAD_REQUEST,
                LedeError::EmptyContent { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                LedeError::InternalError(_)
                | LedeError::FileNotFound(_)
                | LedeError::Io(_)
                | LedeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::UrlRequired(_) => ErrorCode::UrlRequired,
            ApiError::Extraction(err) => err.code(),
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::UrlRequired(details) => details.clone(),
            ApiError::Extraction(err) => Some(err.to_string()),
        }
    }
}

impl From<LedeError> for ApiError {
    fn from(err: LedeError) -> Self {
        ApiError::Extraction(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(%code, details = ?self.details(), "request failed");
        } else {
            tracing::warn!(%code, details = ?self.details(), "request rejected");
        }

        let body = ErrorBody { error: ErrorDetail { code, message: code.message(), details: self.details() } };
        (status, Json(body)).into_response()
    }
}
