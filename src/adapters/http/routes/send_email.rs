//! Email-send endpoint: turns one submission into one confirmation email.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::confirmation_email::SendEmailRequest,
};

#[derive(Serialize)]
struct SendEmailResponse {
    success: bool,
    message: &'static str,
}

/// ANY /api/send-email
/// OPTIONS answers the preflight with an empty 200; only POST sends.
async fn send_email(
    State(app_state): State<AppState>,
    method: Method,
    body: Bytes,
) -> AppResult<Response> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    // Unparseable bodies are treated like a body without `userData`.
    let request: SendEmailRequest = serde_json::from_slice(&body).unwrap_or_default();

    app_state
        .confirmation_email_use_cases
        .send_confirmation(request)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SendEmailResponse {
            success: true,
            message: "Email sent successfully",
        }),
    )
        .into_response())
}

pub fn router() -> Router<AppState> {
    // Open CORS on every response, errors included.
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route("/send-email", any(send_email))
        .layer(cors_headers)
}
