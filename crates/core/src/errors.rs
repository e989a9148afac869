use thiserror::Error;

/// Unified error type for the entire flight-alerts-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// A corrupted persisted collection is deliberately absent from this enum:
/// it is repaired during load and only reported through logging.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Invalid alert parameters: {0}")]
    InvalidAlertParameters(String),

    // ── Storage / Persistence ───────────────────────────────────────
    #[error("Failed to persist alerts: {0}")]
    PersistenceWriteFailure(String),

    #[error("Storage quota exceeded: {required} bytes needed, {quota} allowed")]
    StorageQuotaExceeded { required: usize, quota: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Price not available for flight {flight_id}")]
    PriceNotAvailable { flight_id: String },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors often contain full URLs; query strings may carry API keys.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
