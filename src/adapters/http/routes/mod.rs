pub mod pages;
pub mod send_email;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .nest("/api", send_email::router())
}
