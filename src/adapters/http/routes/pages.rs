use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::{
    adapters::http::{app_state::AppState, views},
    domain::entities::{
        waitlist_form::{SubmissionStatus, WaitlistForm},
        waitlist_submission::WaitlistSubmission,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/waitlist", get(waitlist_form).post(submit_waitlist))
}

/// GET /
async fn landing() -> Html<String> {
    Html(views::landing_page())
}

/// GET /waitlist
/// Always a fresh idle form; this is also where "Submit Another" lands.
async fn waitlist_form() -> Html<String> {
    Html(views::waitlist_page(&WaitlistForm::new()))
}

/// POST /waitlist
/// Runs the submission workflow over the posted fields and renders the
/// resulting state.
async fn submit_waitlist(
    State(app_state): State<AppState>,
    Form(fields): Form<WaitlistSubmission>,
) -> impl IntoResponse {
    let form = app_state
        .waitlist_use_cases
        .submit(WaitlistForm::with_fields(fields))
        .await;

    match form.status {
        SubmissionStatus::Submitted => (StatusCode::OK, Html(views::thank_you_page())),
        SubmissionStatus::Error(_) => (StatusCode::BAD_GATEWAY, Html(views::waitlist_page(&form))),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::waitlist_page(&form)),
        ),
    }
}
