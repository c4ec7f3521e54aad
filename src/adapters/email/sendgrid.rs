use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::confirmation_email::{EmailSender, OutboundEmail},
};

#[derive(Clone)]
pub struct SendGridEmailSender {
    client: Client,
    api_key: SecretString,
    from: String,
    api_base: Url,
}

impl SendGridEmailSender {
    pub fn new(client: Client, api_key: SecretString, from: String, api_base: Url) -> Self {
        Self {
            client,
            api_key,
            from,
            api_base,
        }
    }
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct SendGridReq<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 2],
}

#[async_trait]
impl EmailSender for SendGridEmailSender {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()> {
        let url = self
            .api_base
            .join("v3/mail/send")
            .map_err(|e| AppError::Internal(format!("Invalid SendGrid URL: {e}")))?;

        let body = SendGridReq {
            personalizations: [Personalization {
                to: [Address { email: &email.to }],
            }],
            from: Address { email: &self.from },
            subject: &email.subject,
            content: [
                Content {
                    kind: "text/plain",
                    value: &email.text,
                },
                Content {
                    kind: "text/html",
                    value: &email.html,
                },
            ],
        };

        self.client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send email: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Internal(format!("Email API error: {e}")))?;

        Ok(())
    }
}
