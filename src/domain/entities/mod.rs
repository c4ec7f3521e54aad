pub mod waitlist_form;
pub mod waitlist_submission;
