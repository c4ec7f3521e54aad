pub mod confirmation_email;
pub mod waitlist;
