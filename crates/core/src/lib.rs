pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod shared;
pub mod storage;

use config::AlertConfig;
use models::alert::{AlertCheck, AlertEvaluation, PriceAlert};
use providers::traits::FlightPriceProvider;
use services::alert_evaluator::AlertEvaluator;
use storage::memory::MemoryStore;
use storage::repository::AlertRepository;
use storage::store::KeyValueStore;

use errors::CoreError;

pub use shared::SharedAlertService;

/// Main entry point for the flight price alerts core.
///
/// Presentation code talks only to this type: it validates arguments,
/// then hands work to the repository (storage) and the evaluator (trigger
/// rules). One instance is built per application session.
#[must_use]
pub struct AlertService {
    repository: AlertRepository,
    evaluator: AlertEvaluator,
}

impl std::fmt::Debug for AlertService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertService")
            .field("repository", &self.repository)
            .finish()
    }
}

impl AlertService {
    /// Load the alert collection from `store` using the configured storage key.
    /// A missing or corrupted stored collection yields an empty service.
    pub async fn load(store: Box<dyn KeyValueStore>, config: &AlertConfig) -> Self {
        Self::load_with_key(store, config.storage_key.clone()).await
    }

    /// Load the alert collection stored under an explicit key.
    pub async fn load_with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let repository = AlertRepository::load(store, key).await;
        Self::build(repository)
    }

    /// Create a service over a fresh, unlimited in-memory store.
    pub async fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()), &AlertConfig::default()).await
    }

    // ── Alert Management ────────────────────────────────────────────

    /// Set or replace the price alert for a flight.
    ///
    /// Calling this again for the same flight replaces the earlier alert
    /// (new target, new creation time). Returns the stored alert.
    ///
    /// Validation, all reported as `CoreError::InvalidAlertParameters`:
    /// - `target_price` must be finite and greater than zero
    /// - `current_price` must be finite and not negative
    /// - `flight_id` must not be blank
    /// - `currency` must be exactly 3 ASCII letters (stored upper-cased)
    ///
    /// If the store rejects the write, the alert is still kept in memory and
    /// `CoreError::PersistenceWriteFailure` is returned.
    pub async fn create_alert(
        &mut self,
        flight_id: &str,
        origin: &str,
        destination: &str,
        target_price: f64,
        current_price: f64,
        currency: &str,
    ) -> Result<PriceAlert, CoreError> {
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(CoreError::InvalidAlertParameters(format!(
                "Target price must be a positive number, got {target_price}"
            )));
        }
        if !current_price.is_finite() || current_price < 0.0 {
            return Err(CoreError::InvalidAlertParameters(format!(
                "Current price must be a non-negative number, got {current_price}"
            )));
        }
        if flight_id.trim().is_empty() {
            return Err(CoreError::InvalidAlertParameters(
                "Flight id must not be empty".into(),
            ));
        }
        let currency_code = currency.trim().to_uppercase();
        if currency_code.len() != 3 || !currency_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidAlertParameters(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, EUR, PLN)"
            )));
        }

        let alert = PriceAlert::new(
            flight_id,
            origin,
            destination,
            target_price,
            current_price,
            currency_code,
        );
        self.repository.upsert(alert.clone()).await?;
        tracing::info!(
            "Alert set for flight {} ({}) at {} {}",
            alert.flight_id,
            alert.route(),
            alert.currency,
            alert.target_price
        );
        Ok(alert)
    }

    /// Remove the alert for a flight.
    /// Returns `Ok(false)` if the flight had no alert; that is not an error.
    pub async fn remove_alert(&mut self, flight_id: &str) -> Result<bool, CoreError> {
        let removed = self.repository.remove(flight_id).await?;
        if removed {
            tracing::info!("Alert removed for flight {}", flight_id);
        }
        Ok(removed)
    }

    /// Remove every alert and delete the stored collection.
    pub async fn clear_alerts(&mut self) -> Result<(), CoreError> {
        self.repository.clear().await
    }

    /// Get the alert for a flight, if any.
    #[must_use]
    pub fn get_alert_for_flight(&self, flight_id: &str) -> Option<&PriceAlert> {
        self.repository.find_by_flight_id(flight_id)
    }

    /// Returns `true` if the flight has an alert.
    #[must_use]
    pub fn has_alert(&self, flight_id: &str) -> bool {
        self.repository.find_by_flight_id(flight_id).is_some()
    }

    /// All alerts, in the order they were first created.
    #[must_use]
    pub fn list_alerts(&self) -> &[PriceAlert] {
        self.repository.list()
    }

    /// Number of alerts without materializing a list.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.repository.len()
    }

    // ── Evaluation ──────────────────────────────────────────────────

    /// Evaluate a flight's alert against an observed price.
    ///
    /// `NotApplicable` when the flight has no alert; otherwise `Triggered`
    /// iff the price is known and at or below the target.
    #[must_use]
    pub fn evaluate(&self, flight_id: &str, observed_price: Option<f64>) -> AlertEvaluation {
        self.evaluator
            .evaluate(self.repository.find_by_flight_id(flight_id), observed_price)
    }

    /// Default target price to offer when the user opens the alert form.
    #[must_use]
    pub fn suggested_target_price(&self, current_price: f64) -> Option<f64> {
        self.evaluator.suggested_target_price(current_price)
    }

    /// Check every alert against the live price from `provider`.
    ///
    /// Never fails as a whole: a provider error, a quote for another flight
    /// or a quote in another currency leaves that alert's price unknown, so
    /// it reports `NotTriggered`. Results follow collection order.
    pub async fn check_alerts(&self, provider: &dyn FlightPriceProvider) -> Vec<AlertCheck> {
        let mut checks = Vec::with_capacity(self.repository.len());

        for alert in self.repository.list() {
            let observed_price = match provider.get_current_price(&alert.flight_id).await {
                Ok(quote) if quote.flight_id != alert.flight_id => {
                    tracing::warn!(
                        "{} answered flight {} with a quote for {}; skipping",
                        provider.name(),
                        alert.flight_id,
                        quote.flight_id
                    );
                    None
                }
                Ok(quote) => {
                    let price = quote.price_in(&alert.currency);
                    if price.is_none() {
                        tracing::warn!(
                            "{} quoted flight {} in {}, alert is in {}; skipping",
                            provider.name(),
                            alert.flight_id,
                            quote.currency,
                            alert.currency
                        );
                    }
                    price
                }
                Err(e) => {
                    tracing::warn!(
                        "{} failed to price flight {}: {}",
                        provider.name(),
                        alert.flight_id,
                        e
                    );
                    None
                }
            };

            let evaluation = self.evaluator.evaluate(Some(alert), observed_price);
            checks.push(AlertCheck {
                alert: alert.clone(),
                observed_price,
                evaluation,
            });
        }

        checks
    }

    /// Alerts whose flight currently costs at most their target price.
    pub async fn triggered_alerts(&self, provider: &dyn FlightPriceProvider) -> Vec<PriceAlert> {
        self.check_alerts(provider)
            .await
            .into_iter()
            .filter(|check| check.evaluation.is_triggered())
            .map(|check| check.alert)
            .collect()
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all alerts as a pretty-printed JSON string.
    pub fn export_alerts_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.repository.list())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize alerts to JSON: {e}")))
    }

    /// Key under which the alert collection is stored.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.repository.storage_key()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(repository: AlertRepository) -> Self {
        Self {
            repository,
            evaluator: AlertEvaluator::new(),
        }
    }
}
