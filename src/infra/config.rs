use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_WAITLIST_STORE_URL: &str =
    "https://visafriendly-b3d2a-default-rtdb.firebaseio.com/userdata.json";
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_SITE_URL: &str = "https://www.visafriendly.com/";
pub const SEND_EMAIL_PATH: &str = "/api/send-email";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Email provider API key. Not validated at startup: an empty key
    /// surfaces as a provider rejection on the first send.
    pub sendgrid_api_key: SecretString,
    /// Verified sender address. Same treatment as the API key.
    pub from_email: String,
    pub sendgrid_api_url: Url,
    /// External realtime-database endpoint that receives raw submissions.
    pub waitlist_store_url: Url,
    /// Where the waitlist form asks for the confirmation email.
    /// Defaults to this server's own send-email route.
    pub email_function_url: Url,
    /// Linked from the confirmation email.
    pub site_url: Url,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3000".parse().unwrap());

        let sendgrid_api_key =
            SecretString::new(get_env_default("SENDGRID_API_KEY", String::new()).into());
        let from_email: String = get_env_default("FROM_EMAIL", String::new());
        let sendgrid_api_url: Url = get_env_default(
            "SENDGRID_API_URL",
            Url::parse(DEFAULT_SENDGRID_API_URL).unwrap(),
        );
        let waitlist_store_url: Url = get_env_default(
            "WAITLIST_STORE_URL",
            Url::parse(DEFAULT_WAITLIST_STORE_URL).unwrap(),
        );
        let email_function_url: Url =
            get_env_default("EMAIL_FUNCTION_URL", local_email_function_url(bind_addr));
        let site_url: Url = get_env_default("SITE_URL", Url::parse(DEFAULT_SITE_URL).unwrap());
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            bind_addr,
            sendgrid_api_key,
            from_email,
            sendgrid_api_url,
            waitlist_store_url,
            email_function_url,
            site_url,
            log_file,
        }
    }
}

/// Send-email route on this server, reachable over loopback when bound to
/// the unspecified address.
pub fn local_email_function_url(bind_addr: SocketAddr) -> Url {
    let mut addr = bind_addr;
    if addr.ip().is_unspecified() {
        addr.set_ip(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    Url::parse(&format!("http://{addr}{SEND_EMAIL_PATH}"))
        .unwrap_or_else(|_| Url::parse("http://127.0.0.1:3000/api/send-email").unwrap())
}
