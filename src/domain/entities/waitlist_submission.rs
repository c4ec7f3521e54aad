use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::validators::{is_blank, is_plausible_email};

/// One waitlist signup as entered in the form.
///
/// Values are kept exactly as typed; validation trims only for the
/// emptiness checks. Storage keys are assigned by the external store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub message: String,
}

/// Wire body shared by the storage write and the email endpoint call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDataEnvelope {
    #[serde(rename = "userData")]
    pub user_data: WaitlistSubmission,
}

impl From<WaitlistSubmission> for UserDataEnvelope {
    fn from(user_data: WaitlistSubmission) -> Self {
        Self { user_data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WaitlistField {
    FullName,
    Email,
    JobTitle,
    Message,
}

impl WaitlistField {
    /// Form/wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistField::FullName => "fullName",
            WaitlistField::Email => "email",
            WaitlistField::JobTitle => "jobTitle",
            WaitlistField::Message => "message",
        }
    }
}

impl std::fmt::Display for WaitlistField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-scoped validation messages, kept in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<WaitlistField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: WaitlistField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: WaitlistField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: WaitlistField) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WaitlistField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const JOB_TITLE_REQUIRED: &str = "Preferred job title is required";

impl WaitlistSubmission {
    pub fn field(&self, field: WaitlistField) -> &str {
        match field {
            WaitlistField::FullName => &self.full_name,
            WaitlistField::Email => &self.email,
            WaitlistField::JobTitle => &self.job_title,
            WaitlistField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: WaitlistField, value: String) {
        match field {
            WaitlistField::FullName => self.full_name = value,
            WaitlistField::Email => self.email = value,
            WaitlistField::JobTitle => self.job_title = value,
            WaitlistField::Message => self.message = value,
        }
    }

    /// Client-side validation policy. The message is never checked.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.full_name) {
            errors.insert(WaitlistField::FullName, FULL_NAME_REQUIRED);
        }

        if is_blank(&self.email) {
            errors.insert(WaitlistField::Email, EMAIL_REQUIRED);
        } else if !is_plausible_email(&self.email) {
            errors.insert(WaitlistField::Email, EMAIL_INVALID);
        }

        if is_blank(&self.job_title) {
            errors.insert(WaitlistField::JobTitle, JOB_TITLE_REQUIRED);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_submission;

    #[test]
    fn valid_submission_passes() {
        let submission = create_test_submission(|_| {});
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let submission = create_test_submission(|s| {
            s.full_name = "   ".to_string();
            s.email = "\t".to_string();
            s.job_title = " \n ".to_string();
        });

        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(WaitlistField::FullName), Some(FULL_NAME_REQUIRED));
        assert_eq!(errors.get(WaitlistField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(WaitlistField::JobTitle), Some(JOB_TITLE_REQUIRED));
    }

    #[test]
    fn malformed_email_gets_its_own_message() {
        let submission = create_test_submission(|s| s.email = "alex.example.com".to_string());

        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(WaitlistField::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn message_is_unconstrained() {
        let submission = create_test_submission(|s| s.message = "   ".to_string());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn envelope_uses_wire_names() {
        let envelope = UserDataEnvelope::from(WaitlistSubmission {
            full_name: "Alex Kim".to_string(),
            email: "alex@example.com".to_string(),
            job_title: "Engineer".to_string(),
            message: String::new(),
        });

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({
                "userData": {
                    "fullName": "Alex Kim",
                    "email": "alex@example.com",
                    "jobTitle": "Engineer",
                    "message": ""
                }
            })
        );
    }

    #[test]
    fn missing_message_deserializes_empty() {
        let submission: WaitlistSubmission = serde_json::from_value(serde_json::json!({
            "fullName": "Alex Kim",
            "email": "alex@example.com",
            "jobTitle": "Engineer"
        }))
        .unwrap();
        assert_eq!(submission.message, "");
    }
}
