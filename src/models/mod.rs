// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;
pub mod oauth;

pub use api::AppointmentParams;
pub use app::AppState;
pub use appointments::DownstreamResponse;
pub use oauth::TokenResponse;
