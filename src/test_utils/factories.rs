//! Test data factories for creating valid test fixtures.
//!
//! Each factory returns a complete, valid value. Use the closure parameter
//! to override specific fields.

use url::Url;

use crate::domain::entities::waitlist_submission::WaitlistSubmission;

/// Create a waitlist submission that passes validation.
pub fn create_test_submission(
    overrides: impl FnOnce(&mut WaitlistSubmission),
) -> WaitlistSubmission {
    let mut submission = WaitlistSubmission {
        full_name: "Alex Kim".to_string(),
        email: "alex@example.com".to_string(),
        job_title: "Software Engineer".to_string(),
        message: "Looking for sponsored roles".to_string(),
    };
    overrides(&mut submission);
    submission
}

pub fn test_site_url() -> Url {
    Url::parse("https://www.visafriendly.test/").unwrap()
}
