pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, ConfigError, Credentials};
pub use error::{RelayError, RelayResult};
pub use models::AppState;
