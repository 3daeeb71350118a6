use log::info;
use reqwest::Client;
use std::time::Duration;

/// Shared client for both outbound calls. Without a timeout a hung upstream
/// holds the inbound request open indefinitely.
pub fn create_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder();

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
        info!("Outbound requests time out after {}ms", timeout.as_millis());
    }

    builder.build()
}
