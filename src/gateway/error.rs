//! Maps the core error taxonomy onto HTTP responses.
//!
//! Validation → 400, missing entity or tool → 404, everything else → 500 with
//! an opaque body. Internal detail is logged here and goes no further.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::error::Error;

/// Wire shape for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            Error::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation",
                    message,
                    field: Some(field),
                    id: None,
                },
            ),
            Error::NotFound { kind, id } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not_found",
                    message: format!("{kind} not found"),
                    field: None,
                    id: Some(id),
                },
            ),
            Error::UnknownTool(name) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "unknown_tool",
                    message: format!("unknown tool: {name}"),
                    field: None,
                    id: None,
                },
            ),
            Error::Internal(e) => {
                tracing::error!(error = %e, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal",
                        message: "internal error".to_string(),
                        field: None,
                        id: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
