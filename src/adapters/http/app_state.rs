use std::sync::Arc;

use crate::use_cases::{confirmation_email::ConfirmationEmailUseCases, waitlist::WaitlistUseCases};

#[derive(Clone)]
pub struct AppState {
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub confirmation_email_use_cases: Arc<ConfirmationEmailUseCases>,
}
