// src/services/auth_service/mod.rs

pub mod token_provider;

pub use token_provider::TokenProvider;
