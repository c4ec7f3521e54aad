use crate::{
    adapters::{
        email::sendgrid::SendGridEmailSender, http::app_state::AppState,
        notify::email_endpoint::HttpConfirmationTrigger,
        storage::realtime_db::RealtimeDbWaitlistStore,
    },
    infra::{config::AppConfig, error::InfraError, http_client},
    use_cases::{
        confirmation_email::{ConfirmationEmailUseCases, EmailSender},
        waitlist::{ConfirmationTrigger, WaitlistStore, WaitlistUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let client = http_client::try_build_client()?;

    let store = Arc::new(RealtimeDbWaitlistStore::new(
        client.clone(),
        config.waitlist_store_url.clone(),
    )) as Arc<dyn WaitlistStore>;

    let trigger = Arc::new(HttpConfirmationTrigger::new(
        client.clone(),
        config.email_function_url.clone(),
    )) as Arc<dyn ConfirmationTrigger>;

    let email = Arc::new(SendGridEmailSender::new(
        client,
        config.sendgrid_api_key.clone(),
        config.from_email.clone(),
        config.sendgrid_api_url.clone(),
    )) as Arc<dyn EmailSender>;

    tracing::info!(
        store = %config.waitlist_store_url,
        email_function = %config.email_function_url,
        "Outbound endpoints configured"
    );
    if config.from_email.is_empty() {
        tracing::warn!("FROM_EMAIL is not set; confirmation emails will be rejected by the provider");
    }

    let waitlist_use_cases = WaitlistUseCases::new(store, trigger);
    let confirmation_email_use_cases =
        ConfirmationEmailUseCases::new(email, config.site_url.clone());

    Ok(AppState {
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        confirmation_email_use_cases: Arc::new(confirmation_email_use_cases),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "visafriendly=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped when the file can't be created
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
