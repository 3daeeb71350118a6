pub mod appointment_service;
pub mod auth_service;

pub use appointment_service::RequestForwarder;
pub use auth_service::TokenProvider;
