pub mod traits;

// API provider implementations
pub mod flight_api;
