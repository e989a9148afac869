use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::errors::CoreError;
use crate::models::alert::{AlertEvaluation, PriceAlert};
use crate::AlertService;

/// Cloneable handle for using one `AlertService` from several tasks.
///
/// Every operation takes the service lock for its whole duration, including
/// the store write. Tokio's mutex grants the lock in request order, so
/// overlapping mutations are applied and persisted one at a time, in the
/// order they were issued.
#[derive(Debug, Clone)]
pub struct SharedAlertService {
    inner: Arc<Mutex<AlertService>>,
}

impl SharedAlertService {
    pub fn new(service: AlertService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Exclusive access for callers that need several operations in a row.
    pub async fn lock(&self) -> MutexGuard<'_, AlertService> {
        self.inner.lock().await
    }

    pub async fn create_alert(
        &self,
        flight_id: &str,
        origin: &str,
        destination: &str,
        target_price: f64,
        current_price: f64,
        currency: &str,
    ) -> Result<PriceAlert, CoreError> {
        self.inner
            .lock()
            .await
            .create_alert(flight_id, origin, destination, target_price, current_price, currency)
            .await
    }

    pub async fn remove_alert(&self, flight_id: &str) -> Result<bool, CoreError> {
        self.inner.lock().await.remove_alert(flight_id).await
    }

    pub async fn clear_alerts(&self) -> Result<(), CoreError> {
        self.inner.lock().await.clear_alerts().await
    }

    pub async fn get_alert_for_flight(&self, flight_id: &str) -> Option<PriceAlert> {
        self.inner
            .lock()
            .await
            .get_alert_for_flight(flight_id)
            .cloned()
    }

    /// Snapshot of all alerts at the time of the call.
    pub async fn list_alerts(&self) -> Vec<PriceAlert> {
        self.inner.lock().await.list_alerts().to_vec()
    }

    pub async fn evaluate(&self, flight_id: &str, observed_price: Option<f64>) -> AlertEvaluation {
        self.inner.lock().await.evaluate(flight_id, observed_price)
    }

    pub async fn alert_count(&self) -> usize {
        self.inner.lock().await.alert_count()
    }
}
