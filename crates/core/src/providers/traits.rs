use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::FlightQuote;

/// Trait abstraction for live flight price sources.
///
/// The alert core only needs "what does this flight cost right now"; the
/// HTTP API, a mock, or a cached search result can all answer that.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FlightPriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the current fare of a flight.
    async fn get_current_price(&self, flight_id: &str) -> Result<FlightQuote, CoreError>;
}
