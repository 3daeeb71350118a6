pub mod appointment;

pub use appointment::DownstreamResponse;
