use serde::{Deserialize, Serialize};

/// A live price observation for one flight, as reported by a price provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuote {
    pub flight_id: String,

    /// Current fare in `currency`
    pub price: f64,

    /// Three-letter currency code of `price`
    pub currency: String,
}

impl FlightQuote {
    pub fn new(flight_id: impl Into<String>, price: f64, currency: impl Into<String>) -> Self {
        Self {
            flight_id: flight_id.into(),
            price,
            currency: currency.into().to_uppercase(),
        }
    }

    /// Returns the price only if it is expressed in `currency`.
    /// No conversion is attempted across currencies.
    #[must_use]
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.currency
            .eq_ignore_ascii_case(currency)
            .then_some(self.price)
    }
}
