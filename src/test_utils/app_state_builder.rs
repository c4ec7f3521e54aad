//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` whose outbound ports are
//! in-memory mocks, so routes can be exercised without network access.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        confirmation_email::{ConfirmationEmailUseCases, EmailSender},
        waitlist::{ConfirmationTrigger, WaitlistStore, WaitlistUseCases},
    },
    test_utils::{
        CallLog, InMemoryConfirmationTrigger, InMemoryEmailSender, InMemoryWaitlistStore,
        test_site_url,
    },
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let sender = Arc::new(InMemoryEmailSender::new());
/// let app_state = TestAppStateBuilder::new()
///     .with_email_sender(sender.clone())
///     .build();
/// ```
pub struct TestAppStateBuilder {
    waitlist_store: Option<Arc<dyn WaitlistStore>>,
    confirmation_trigger: Option<Arc<dyn ConfirmationTrigger>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            waitlist_store: None,
            confirmation_trigger: None,
            email_sender: None,
        }
    }

    /// Set a custom waitlist store (for asserting stored payloads).
    pub fn with_waitlist_store(mut self, store: Arc<dyn WaitlistStore>) -> Self {
        self.waitlist_store = Some(store);
        self
    }

    /// Set a custom confirmation trigger (for asserting email requests).
    pub fn with_confirmation_trigger(mut self, trigger: Arc<dyn ConfirmationTrigger>) -> Self {
        self.confirmation_trigger = Some(trigger);
        self
    }

    /// Set a custom email sender (for testing the send-email endpoint).
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let log = CallLog::new();
        let waitlist_store: Arc<dyn WaitlistStore> = self
            .waitlist_store
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistStore::new(log.clone())));
        let confirmation_trigger: Arc<dyn ConfirmationTrigger> = self
            .confirmation_trigger
            .unwrap_or_else(|| Arc::new(InMemoryConfirmationTrigger::new(log)));
        let email_sender: Arc<dyn EmailSender> = self
            .email_sender
            .unwrap_or_else(|| Arc::new(InMemoryEmailSender::new()));

        AppState {
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(
                waitlist_store,
                confirmation_trigger,
            )),
            confirmation_email_use_cases: Arc::new(ConfirmationEmailUseCases::new(
                email_sender,
                test_site_url(),
            )),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
