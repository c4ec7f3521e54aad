use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_submission::UserDataEnvelope,
    use_cases::waitlist::ConfirmationTrigger,
};

/// Asks the email-send endpoint to mail a confirmation for a submission.
#[derive(Clone)]
pub struct HttpConfirmationTrigger {
    client: Client,
    endpoint: Url,
}

impl HttpConfirmationTrigger {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ConfirmationTrigger for HttpConfirmationTrigger {
    async fn trigger(&self, envelope: &UserDataEnvelope) -> AppResult<()> {
        self.client
            .post(self.endpoint.clone())
            .json(envelope)
            .send()
            .await
            .map_err(|e| AppError::Notification(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Notification(format!("email endpoint error: {e}")))?;
        Ok(())
    }
}
