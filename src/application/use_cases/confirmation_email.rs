use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::email_templates::confirmation_email,
};

/// A fully rendered message ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()>;
}

/// `userData` as received by the email-send endpoint. Every field is
/// optional on the wire; only `email` and `fullName` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundUserData {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendEmailRequest {
    #[serde(rename = "userData")]
    pub user_data: Option<InboundUserData>,
}

#[derive(Clone)]
pub struct ConfirmationEmailUseCases {
    sender: Arc<dyn EmailSender>,
    site_url: Url,
}

impl ConfirmationEmailUseCases {
    pub fn new(sender: Arc<dyn EmailSender>, site_url: Url) -> Self {
        Self { sender, site_url }
    }

    /// Sends one confirmation per call. No de-duplication.
    ///
    /// Provider failures are logged here and surfaced only as
    /// `EmailDelivery` without their cause.
    #[instrument(skip_all)]
    pub async fn send_confirmation(&self, request: SendEmailRequest) -> AppResult<()> {
        let user_data = request.user_data.unwrap_or_default();
        let (Some(to), Some(full_name)) = (
            non_empty(user_data.email),
            non_empty(user_data.full_name),
        ) else {
            return Err(AppError::MissingFields);
        };

        let template = confirmation_email(&full_name, &self.site_url);
        let email = OutboundEmail {
            to,
            subject: template.subject,
            text: template.text,
            html: template.html,
        };

        match self.sender.send(&email).await {
            Ok(()) => {
                tracing::info!(to = %email.to, "Confirmation email sent");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Confirmation email failed");
                Err(AppError::EmailDelivery("provider rejected send".into()))
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryEmailSender, test_site_url};

    fn request(email: Option<&str>, full_name: Option<&str>) -> SendEmailRequest {
        SendEmailRequest {
            user_data: Some(InboundUserData {
                email: email.map(str::to_string),
                full_name: full_name.map(str::to_string),
                job_title: Some("Engineer".to_string()),
                message: None,
            }),
        }
    }

    #[tokio::test]
    async fn sends_one_templated_email() {
        let sender = Arc::new(InMemoryEmailSender::new());
        let use_cases = ConfirmationEmailUseCases::new(sender.clone(), test_site_url());

        use_cases
            .send_confirmation(request(Some("alex@example.com"), Some("Alex Kim")))
            .await
            .unwrap();

        let emails = sender.captured_emails();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].to, "alex@example.com");
        assert!(emails[0].html.contains("Hi Alex Kim!"));
        assert!(emails[0].text.contains("Alex Kim"));
    }

    #[tokio::test]
    async fn missing_fields_never_reach_provider() {
        let sender = Arc::new(InMemoryEmailSender::new());
        let use_cases = ConfirmationEmailUseCases::new(sender.clone(), test_site_url());

        for req in [
            request(None, Some("Alex Kim")),
            request(Some("alex@example.com"), None),
            request(Some(""), Some("Alex Kim")),
            request(Some("alex@example.com"), Some("")),
            SendEmailRequest { user_data: None },
        ] {
            let result = use_cases.send_confirmation(req).await;
            assert!(matches!(result, Err(AppError::MissingFields)));
        }

        assert!(sender.captured_emails().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_is_collapsed() {
        let sender = Arc::new(InMemoryEmailSender::failing("401 Unauthorized: bad key"));
        let use_cases = ConfirmationEmailUseCases::new(sender, test_site_url());

        let err = use_cases
            .send_confirmation(request(Some("alex@example.com"), Some("Alex Kim")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmailDelivery(_)));
        assert!(!err.to_string().contains("bad key"));
    }

    #[tokio::test]
    async fn repeated_calls_send_repeatedly() {
        let sender = Arc::new(InMemoryEmailSender::new());
        let use_cases = ConfirmationEmailUseCases::new(sender.clone(), test_site_url());

        for _ in 0..2 {
            use_cases
                .send_confirmation(request(Some("alex@example.com"), Some("Alex Kim")))
                .await
                .unwrap();
        }

        assert_eq!(sender.captured_emails().len(), 2);
    }
}
