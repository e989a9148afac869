use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::alert::PriceAlert;

/// Serialize the whole alert collection into its stored document.
///
/// Layout: a JSON array of alert objects, in collection order:
/// ```text
/// [{"flightId":"F1","origin":"WAW","destination":"JFK","targetPrice":300.0,
///   "currentPriceAtCreation":350.0,"currency":"USD","createdAt":"2025-01-15T10:00:00Z"}]
/// ```
pub fn encode_alerts(alerts: &[PriceAlert]) -> Result<String, CoreError> {
    serde_json::to_string(alerts)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize alerts: {e}")))
}

/// Parse a stored document back into an alert collection.
///
/// Fails on malformed JSON, on records missing any field, and on documents
/// that break the collection invariants (see [`validate_collection`]).
/// Nothing is partially hydrated: one bad record rejects the whole document.
pub fn decode_alerts(document: &str) -> Result<Vec<PriceAlert>, CoreError> {
    let alerts: Vec<PriceAlert> = serde_json::from_str(document)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse alerts: {e}")))?;
    validate_collection(&alerts)?;
    Ok(alerts)
}

/// Check the invariants a stored collection must satisfy:
/// - at most one alert per flight id
/// - every target price positive and finite
pub fn validate_collection(alerts: &[PriceAlert]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(alerts.len());
    for alert in alerts {
        if !seen.insert(alert.flight_id.as_str()) {
            return Err(CoreError::Deserialization(format!(
                "Duplicate alert for flight '{}'",
                alert.flight_id
            )));
        }
        if !alert.target_price.is_finite() || alert.target_price <= 0.0 {
            return Err(CoreError::Deserialization(format!(
                "Alert for flight '{}' has invalid target price {}",
                alert.flight_id, alert.target_price
            )));
        }
    }
    Ok(())
}
