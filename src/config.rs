use std::{env, fmt, time::Duration};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Client-credentials pair for the identity provider.
#[derive(Clone)]
pub struct Credentials {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub oauth: Credentials,
    pub appointment_service_url: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Read the process environment. Call after `dotenv().ok()`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values are treated the same as unset ones.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let request_timeout = match get("OUTBOUND_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(raw.trim().parse::<u64>().map_err(
                |_| ConfigError::Invalid {
                    name: "OUTBOUND_TIMEOUT_SECS",
                    value: raw,
                },
            )?)),
            None => None,
        };

        Ok(Self {
            port,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            oauth: Credentials {
                token_url: require("APPOINTMENTS_OAUTH_TOKEN_URL")?,
                client_id: require("APPOINTMENTS_OAUTH_CLIENT_ID")?,
                client_secret: require("APPOINTMENTS_OAUTH_CLIENT_SECRET")?,
                scope: get("APPOINTMENTS_OAUTH_SCOPE"),
            },
            appointment_service_url: get("APPOINTMENT_SERVICE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            request_timeout,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
