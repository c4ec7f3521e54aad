pub mod email_endpoint;
