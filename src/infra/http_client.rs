//! Shared construction of outbound HTTP clients.
//!
//! The waitlist store, the email-endpoint trigger and the SendGrid sender
//! all build their `reqwest::Client` here so every outbound call carries
//! the same connect and request timeouts.

use reqwest::Client;
use std::time::Duration;

/// TCP handshake + TLS.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request/response time for one outbound call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with default timeouts.
///
/// Panics if the client cannot be built (e.g., TLS misconfiguration).
/// Only called while wiring singletons at startup.
pub fn build_client() -> Client {
    try_build_client().expect("Failed to build HTTP client")
}

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
}
