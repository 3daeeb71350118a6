use crate::config::Credentials;
use crate::error::{status_message, RelayError, RelayResult};
use crate::models::TokenResponse;
use log::{error, info};
use reqwest::{header, Client};

const NO_TOKEN: &str = "Token response did not contain an access token";

/// Exchanges the configured client credentials for a bearer token.
///
/// Every call performs a fresh exchange; nothing is cached between requests.
#[derive(Clone)]
pub struct TokenProvider {
    http_client: Client,
    credentials: Credentials,
}

impl TokenProvider {
    pub fn new(http_client: Client, credentials: Credentials) -> Self {
        Self {
            http_client,
            credentials,
        }
    }

    /// Run a client-credentials grant against the token endpoint.
    ///
    /// Failures are logged here and handed back unchanged so the caller can
    /// shape them like any other upstream failure.
    pub async fn acquire_token(&self) -> RelayResult<String> {
        match self.request_token().await {
            Ok(token) => Ok(token),
            Err(e) => {
                error!("Error obtaining access token: {}", e);
                Err(e)
            }
        }
    }

    async fn request_token(&self) -> RelayResult<String> {
        let mut params = vec![
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];
        if let Some(scope) = &self.credentials.scope {
            params.push(("scope", scope.as_str()));
        }

        let response = self
            .http_client
            .post(&self.credentials.token_url)
            .header(header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(auth_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Token endpoint {} answered {}: {}",
                self.credentials.token_url, status, error_text
            );
            return Err(RelayError::Authentication {
                status: Some(status.as_u16()),
                message: status_message(status.as_u16()),
            });
        }

        let token = response.json::<TokenResponse>().await.map_err(auth_error)?;

        match token.access_token.filter(|t| !t.is_empty()) {
            Some(access_token) => {
                info!(
                    "Obtained {} token from identity provider (expires in {}s)",
                    token.token_type.as_deref().unwrap_or("bearer"),
                    token
                        .expires_in
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "?".to_string())
                );
                Ok(access_token)
            }
            None => Err(RelayError::Authentication {
                status: None,
                message: NO_TOKEN.to_string(),
            }),
        }
    }
}

fn auth_error(e: reqwest::Error) -> RelayError {
    RelayError::Authentication {
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}
