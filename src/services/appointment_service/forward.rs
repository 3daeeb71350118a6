use crate::error::{status_message, RelayError, RelayResult};
use crate::models::DownstreamResponse;
use crate::services::TokenProvider;
use log::{error, warn};
use reqwest::{header, Client, RequestBuilder};
use serde_json::Value;

/// Turns one inbound call into one authorized call against the appointment
/// service and hands back whatever it answered.
pub struct RequestForwarder {
    http_client: Client,
    tokens: TokenProvider,
    base_url: Option<String>,
}

impl RequestForwarder {
    pub fn new(http_client: Client, tokens: TokenProvider, base_url: Option<String>) -> Self {
        Self {
            http_client,
            tokens,
            base_url,
        }
    }

    /// `GET {base}/appointments?email=` on behalf of the caller.
    pub async fn fetch_appointments(&self, email: Option<&str>) -> RelayResult<DownstreamResponse> {
        let Some(email) = email else {
            warn!("Rejected appointment lookup without email");
            return Err(RelayError::missing_email());
        };

        let result: RelayResult<DownstreamResponse> = async {
            let url = appointments_url(self.base_url()?);
            let token = self.tokens.acquire_token().await?;
            let request = self
                .http_client
                .get(url)
                .query(&[("email", email)])
                .bearer_auth(token);
            send(request).await
        }
        .await;

        if let Err(e) = &result {
            error!("Error fetching appointments: {}", e);
        }
        result
    }

    /// `POST {base}/appointments` with the caller's JSON body unchanged.
    pub async fn create_appointment(&self, payload: &Value) -> RelayResult<DownstreamResponse> {
        let result: RelayResult<DownstreamResponse> = async {
            let url = appointments_url(self.base_url()?);
            let token = self.tokens.acquire_token().await?;
            let request = self.http_client.post(url).json(payload).bearer_auth(token);
            send(request).await
        }
        .await;

        if let Err(e) = &result {
            error!("Error forwarding appointment creation request: {}", e);
        }
        result
    }

    fn base_url(&self) -> RelayResult<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(RelayError::missing_service_url)
    }
}

fn appointments_url(base_url: &str) -> String {
    format!("{}/appointments", base_url.trim_end_matches('/'))
}

async fn send(request: RequestBuilder) -> RelayResult<DownstreamResponse> {
    let response = request.send().await.map_err(downstream_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::Downstream {
            status: Some(status.as_u16()),
            message: status_message(status.as_u16()),
        });
    }

    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await.map_err(downstream_error)?;

    Ok(DownstreamResponse {
        status,
        content_type,
        body,
    })
}

fn downstream_error(e: reqwest::Error) -> RelayError {
    RelayError::Downstream {
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}
