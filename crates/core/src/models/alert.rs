use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's request to be told when a flight's fare drops to or below a threshold.
///
/// Field names are part of the durable storage contract: the collection is
/// persisted as a JSON array of these records, with camelCase keys
/// (`flightId`, `targetPrice`, `currentPriceAtCreation`, `createdAt`, ...).
/// Every field is required when reading a stored document back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    /// Opaque flight identifier; at most one alert exists per flight
    pub flight_id: String,

    /// Departure airport/city code, copied at creation time
    pub origin: String,

    /// Arrival airport/city code, copied at creation time
    pub destination: String,

    /// Threshold price; the alert triggers at or below it
    pub target_price: f64,

    /// Fare seen when the alert was created (informational, not the live price)
    pub current_price_at_creation: f64,

    /// Three-letter currency code shared by `target_price` and observed prices
    pub currency: String,

    /// Creation instant, never changed afterwards
    pub created_at: DateTime<Utc>,
}

impl PriceAlert {
    /// Build an alert stamped with the current time.
    /// Performs no validation; `AlertService::create_alert` is the validating entry point.
    pub fn new(
        flight_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        target_price: f64,
        current_price_at_creation: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            flight_id: flight_id.into(),
            origin: origin.into(),
            destination: destination.into(),
            target_price,
            current_price_at_creation,
            currency: currency.into(),
            created_at: Utc::now(),
        }
    }

    /// Route label for display, e.g. `"WAW → JFK"`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

/// Outcome of evaluating a flight against its alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertEvaluation {
    /// No alert exists for the flight
    NotApplicable,
    /// An alert exists but the observed price is above target (or unknown)
    NotTriggered,
    /// The observed price is at or below the alert's target
    Triggered,
}

impl AlertEvaluation {
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        matches!(self, AlertEvaluation::Triggered)
    }
}

impl std::fmt::Display for AlertEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertEvaluation::NotApplicable => write!(f, "Not applicable"),
            AlertEvaluation::NotTriggered => write!(f, "Not triggered"),
            AlertEvaluation::Triggered => write!(f, "Triggered"),
        }
    }
}

/// Result of checking one stored alert against a live price.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCheck {
    pub alert: PriceAlert,

    /// Price used for evaluation; `None` when the provider failed or
    /// quoted a different currency
    pub observed_price: Option<f64>,

    pub evaluation: AlertEvaluation,
}
