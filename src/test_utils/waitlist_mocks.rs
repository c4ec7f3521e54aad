//! In-memory implementations of the outbound ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{
        confirmation_email::{EmailSender, OutboundEmail},
        waitlist::{ConfirmationTrigger, WaitlistStore},
    },
    domain::entities::waitlist_submission::UserDataEnvelope,
};

// ============================================================================
// CallLog
// ============================================================================

/// Ordered record of outbound calls shared between mocks, for asserting
/// which port was hit and in what order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: &'static str) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

// ============================================================================
// InMemoryWaitlistStore
// ============================================================================

pub struct InMemoryWaitlistStore {
    records: Mutex<Vec<UserDataEnvelope>>,
    log: CallLog,
    fail: bool,
}

impl InMemoryWaitlistStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            records: Mutex::new(vec![]),
            log,
            fail: false,
        }
    }

    /// Every append fails as if the store answered with a non-200 status.
    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    /// Stored payloads (for test assertions).
    pub fn records(&self) -> Vec<UserDataEnvelope> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn append(&self, envelope: &UserDataEnvelope) -> AppResult<()> {
        self.log.push("store");
        if self.fail {
            return Err(AppError::Storage("unexpected status 500".into()));
        }
        self.records.lock().unwrap().push(envelope.clone());
        Ok(())
    }
}

// ============================================================================
// InMemoryConfirmationTrigger
// ============================================================================

pub struct InMemoryConfirmationTrigger {
    requests: Mutex<Vec<UserDataEnvelope>>,
    log: CallLog,
    fail: bool,
}

impl InMemoryConfirmationTrigger {
    pub fn new(log: CallLog) -> Self {
        Self {
            requests: Mutex::new(vec![]),
            log,
            fail: false,
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    /// Payloads that reached the trigger, including failed ones.
    pub fn requests(&self) -> Vec<UserDataEnvelope> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationTrigger for InMemoryConfirmationTrigger {
    async fn trigger(&self, envelope: &UserDataEnvelope) -> AppResult<()> {
        self.log.push("confirm");
        self.requests.lock().unwrap().push(envelope.clone());
        if self.fail {
            return Err(AppError::Notification("unexpected status 500".into()));
        }
        Ok(())
    }
}

// ============================================================================
// InMemoryEmailSender
// ============================================================================

/// Captures emails instead of sending them.
#[derive(Default)]
pub struct InMemoryEmailSender {
    emails: Mutex<Vec<OutboundEmail>>,
    failure: Option<String>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails with the given provider error text.
    pub fn failing(reason: &str) -> Self {
        Self {
            emails: Mutex::new(vec![]),
            failure: Some(reason.to_string()),
        }
    }

    /// Successfully "sent" emails.
    pub fn captured_emails(&self) -> Vec<OutboundEmail> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()> {
        if let Some(reason) = &self.failure {
            return Err(AppError::Internal(reason.clone()));
        }
        self.emails.lock().unwrap().push(email.clone());
        Ok(())
    }
}
