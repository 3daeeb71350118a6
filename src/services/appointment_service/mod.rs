// src/services/appointment_service/mod.rs

pub mod forward;

pub use forward::RequestForwarder;
