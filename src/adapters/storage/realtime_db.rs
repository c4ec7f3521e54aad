//! Waitlist store backed by a hosted realtime database's REST endpoint.
//!
//! A POST appends the body under a key generated by the database.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_submission::UserDataEnvelope,
    use_cases::waitlist::WaitlistStore,
};

#[derive(Clone)]
pub struct RealtimeDbWaitlistStore {
    client: Client,
    endpoint: Url,
}

impl RealtimeDbWaitlistStore {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl WaitlistStore for RealtimeDbWaitlistStore {
    async fn append(&self, envelope: &UserDataEnvelope) -> AppResult<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(envelope)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("request failed: {e}")))?;

        // Only a plain 200 counts as stored.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::Storage(format!("unexpected status {status}")));
        }

        Ok(())
    }
}
