use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::AlertConfig;
use crate::errors::CoreError;
use crate::models::quote::FlightQuote;
use super::traits::FlightPriceProvider;

const PROVIDER_NAME: &str = "FlightApi";

/// Flights REST API provider.
///
/// - **Endpoint**: `GET {base}/flights/{id}`, id percent-encoded
/// - **Response**: a flight offer object; only `id`, `price` and `currency`
///   are read, everything else (airline, segments, seats...) is ignored.
pub struct FlightApiProvider {
    client: Client,
    base_url: String,
}

impl FlightApiProvider {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(timeout_secs));
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_secs;
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.request_timeout_secs)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/flights/{id}` with the id as one percent-encoded path segment.
    fn offer_url(&self, flight_id: &str) -> Result<Url, CoreError> {
        let invalid_base = |reason: String| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Invalid base URL '{}': {reason}", self.base_url),
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_base(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid_base("cannot be a base".into()))?
            .pop_if_empty()
            .push("flights")
            .push(flight_id);
        Ok(url)
    }
}

// ── Flights API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct FlightOfferResponse {
    id: String,
    price: f64,
    currency: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FlightPriceProvider for FlightApiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get_current_price(&self, flight_id: &str) -> Result<FlightQuote, CoreError> {
        let url = self.offer_url(flight_id)?;

        let resp = self.client.get(url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(CoreError::PriceNotAvailable {
                flight_id: flight_id.to_string(),
            });
        }
        if !resp.status().is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("HTTP {} for flight {flight_id}", resp.status()),
            });
        }

        let offer: FlightOfferResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse offer for flight {flight_id}: {e}"),
        })?;

        if !offer.price.is_finite() || offer.price < 0.0 {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Invalid price {} for flight {flight_id}", offer.price),
            });
        }

        Ok(FlightQuote::new(offer.id, offer.price, offer.currency))
    }
}
