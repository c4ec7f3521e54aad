use super::waitlist_submission::{FieldErrors, WaitlistField, WaitlistSubmission};

/// User-facing message for any failed submission attempt.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit. Please try again later.";

/// Submission lifecycle of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// Carries the message shown above the submit button.
    Error(String),
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Error(_) => "error",
        }
    }

    /// Submit is only accepted from these states.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Error(_))
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State owned by a single rendered waitlist form.
///
/// Passed by value through validation and submission; nothing here is
/// shared between form instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub fields: WaitlistSubmission,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: WaitlistSubmission) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Updates one field and drops any error recorded against it.
    pub fn edit(&mut self, field: WaitlistField, value: impl Into<String>) {
        self.fields.set_field(field, value.into());
        self.errors.clear(field);
    }

    /// Runs validation, storing the result on the form.
    pub fn validate(&mut self) -> bool {
        match self.fields.validate() {
            Ok(()) => {
                self.errors.clear_all();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// idle|error -> submitting. Returns false when the transition is not allowed.
    pub fn begin_submit(&mut self) -> bool {
        if !self.status.can_submit() {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        true
    }

    pub fn mark_submitted(&mut self) {
        self.status = SubmissionStatus::Submitted;
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Error(message.into());
    }

    pub fn submit_error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }
}
