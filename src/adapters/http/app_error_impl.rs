use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        // Log the error before it gets converted into a status response.
        // Causes stay in the log and never reach the body.
        match &self {
            AppError::MissingFields | AppError::MethodNotAllowed => {
                tracing::warn!(error = %self, code = code.as_str(), "Request rejected");
            }
            _ => tracing::error!(error = ?self, code = code.as_str(), "Request failed"),
        }

        match self {
            AppError::MissingFields => error_resp(StatusCode::BAD_REQUEST, "Missing required fields"),
            AppError::MethodNotAllowed => {
                error_resp(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            AppError::EmailDelivery(_) => failure_resp("Failed to send email"),
            AppError::Storage(_) | AppError::Notification(_) | AppError::Internal(_) => {
                failure_resp("Internal server error")
            }
        }
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn failure_resp(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "success": false, "error": message })),
    )
        .into_response()
}
