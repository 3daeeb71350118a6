use crate::config::Config;
use crate::services::{RequestForwarder, TokenProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<RequestForwarder>,
}

impl AppState {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        let http_client = crate::utils::http::create_client(config.request_timeout)?;
        let tokens = TokenProvider::new(http_client.clone(), config.oauth);
        let forwarder =
            RequestForwarder::new(http_client, tokens, config.appointment_service_url);

        Ok(Self {
            forwarder: Arc::new(forwarder),
        })
    }
}
