pub mod http;
pub mod log_utils;

pub use http::create_client;
pub use log_utils::init_logging;
