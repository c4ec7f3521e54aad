use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::AppResult,
    domain::entities::{
        waitlist_form::{SUBMIT_FAILED_MESSAGE, WaitlistForm},
        waitlist_submission::UserDataEnvelope,
    },
};

/// Authoritative write of a submission to the external waitlist store.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn append(&self, envelope: &UserDataEnvelope) -> AppResult<()>;
}

/// Best-effort request for a confirmation email.
#[async_trait]
pub trait ConfirmationTrigger: Send + Sync {
    async fn trigger(&self, envelope: &UserDataEnvelope) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    store: Arc<dyn WaitlistStore>,
    confirmation: Arc<dyn ConfirmationTrigger>,
}

impl WaitlistUseCases {
    pub fn new(store: Arc<dyn WaitlistStore>, confirmation: Arc<dyn ConfirmationTrigger>) -> Self {
        Self {
            store,
            confirmation,
        }
    }

    /// Validate, store, then request the confirmation email.
    ///
    /// The store result alone decides the outcome. The confirmation call is
    /// awaited after a successful write and its failure is only logged.
    /// Nothing is retried and repeated submits are stored again.
    #[instrument(skip_all)]
    pub async fn submit(&self, mut form: WaitlistForm) -> WaitlistForm {
        if !form.status.can_submit() {
            tracing::debug!(status = %form.status, "Ignoring submit in current state");
            return form;
        }

        if !form.validate() {
            let invalid: Vec<&str> = form.errors.iter().map(|(field, _)| field.as_str()).collect();
            tracing::debug!(?invalid, "Waitlist form rejected");
            return form;
        }

        form.begin_submit();

        let envelope = UserDataEnvelope::from(form.fields.clone());

        if let Err(err) = self.store.append(&envelope).await {
            tracing::error!(error = %err, "Waitlist submission failed");
            form.mark_failed(SUBMIT_FAILED_MESSAGE);
            return form;
        }

        if let Err(err) = self.confirmation.trigger(&envelope).await {
            tracing::warn!(error = %err, "Submission stored but confirmation email failed");
        }

        tracing::info!("Waitlist submission stored");
        form.mark_submitted();
        form
    }
}
