use crate::errors::CoreError;
use crate::models::alert::PriceAlert;

use super::format;
use super::store::KeyValueStore;

/// Owns the alert collection and its durable copy.
///
/// The in-memory `Vec` is authoritative while the process runs; the store
/// holds one serialized document that is rewritten in full after every
/// mutation. Mutations take `&mut self`, so writes to the store can never
/// interleave for one repository.
pub struct AlertRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
    alerts: Vec<PriceAlert>,
}

impl std::fmt::Debug for AlertRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertRepository")
            .field("store", &self.store.name())
            .field("key", &self.key)
            .field("alerts", &self.alerts.len())
            .finish()
    }
}

impl AlertRepository {
    /// Read the stored collection under `key` and build a repository from it.
    ///
    /// Never fails:
    /// - nothing stored → empty collection
    /// - store read error → empty collection, stored value left untouched
    /// - unreadable or invalid document → stored value removed, empty collection
    pub async fn load(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let alerts = match store.get(&key).await {
            Ok(None) => {
                tracing::debug!("No stored alerts under '{}' in {}", key, store.name());
                Vec::new()
            }
            Ok(Some(document)) => match format::decode_alerts(&document) {
                Ok(alerts) => {
                    tracing::debug!("Loaded {} alert(s) from {}", alerts.len(), store.name());
                    alerts
                }
                Err(e) => {
                    tracing::warn!(
                        "Discarding corrupted alerts stored under '{}': {}",
                        key,
                        e
                    );
                    if let Err(e) = store.remove(&key).await {
                        tracing::warn!("Failed to clear corrupted entry '{}': {}", key, e);
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read alerts from {}, starting empty: {}",
                    store.name(),
                    e
                );
                Vec::new()
            }
        };

        Self { store, key, alerts }
    }

    /// Insert an alert, replacing any existing alert for the same flight in place.
    ///
    /// On a store failure the in-memory collection keeps the change and
    /// `CoreError::PersistenceWriteFailure` is returned.
    pub async fn upsert(&mut self, alert: PriceAlert) -> Result<(), CoreError> {
        match self
            .alerts
            .iter_mut()
            .find(|a| a.flight_id == alert.flight_id)
        {
            Some(existing) => *existing = alert,
            None => self.alerts.push(alert),
        }
        self.persist().await
    }

    /// Remove the alert for `flight_id`.
    /// Returns `Ok(false)` without touching the store if there was none.
    pub async fn remove(&mut self, flight_id: &str) -> Result<bool, CoreError> {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.flight_id != flight_id);
        if self.alerts.len() == before {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Drop every alert and delete the stored document.
    pub async fn clear(&mut self) -> Result<(), CoreError> {
        self.alerts.clear();
        self.store.remove(&self.key).await.map_err(|e| {
            tracing::warn!("Failed to clear alerts in {}: {}", self.store.name(), e);
            CoreError::PersistenceWriteFailure(e.to_string())
        })
    }

    #[must_use]
    pub fn find_by_flight_id(&self, flight_id: &str) -> Option<&PriceAlert> {
        self.alerts.iter().find(|a| a.flight_id == flight_id)
    }

    /// All alerts, in insertion order (replacements keep their slot).
    #[must_use]
    pub fn list(&self) -> &[PriceAlert] {
        &self.alerts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Key under which the collection is stored.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Write the full collection back to the store.
    async fn persist(&self) -> Result<(), CoreError> {
        let document = format::encode_alerts(&self.alerts)?;
        self.store
            .set(&self.key, &document)
            .await
            .map_err(|e| {
                tracing::warn!(
                    "Failed to persist {} alert(s) to {}: {}",
                    self.alerts.len(),
                    self.store.name(),
                    e
                );
                CoreError::PersistenceWriteFailure(e.to_string())
            })
    }
}
