use crate::models::alert::{AlertEvaluation, PriceAlert};

/// Decides whether an alert's price condition holds.
///
/// Pure business logic — no state, no I/O. Easy to test.
pub struct AlertEvaluator;

impl AlertEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// `true` iff a known price is at or below the alert's target.
    ///
    /// An unknown price never triggers. A price that is not finite or is
    /// negative is not a usable observation and is treated as unknown.
    #[must_use]
    pub fn is_triggered(&self, alert: &PriceAlert, observed_price: Option<f64>) -> bool {
        match observed_price {
            Some(price) if price.is_finite() && price >= 0.0 => price <= alert.target_price,
            _ => false,
        }
    }

    /// Evaluate an optional alert; `None` yields `NotApplicable`.
    #[must_use]
    pub fn evaluate(&self, alert: Option<&PriceAlert>, observed_price: Option<f64>) -> AlertEvaluation {
        match alert {
            None => AlertEvaluation::NotApplicable,
            Some(alert) if self.is_triggered(alert, observed_price) => AlertEvaluation::Triggered,
            Some(_) => AlertEvaluation::NotTriggered,
        }
    }

    /// Default target for a new alert: 90% of the current price, rounded
    /// down to a whole unit and never below 1.
    /// Returns `None` when `current_price` is not a positive finite number.
    #[must_use]
    pub fn suggested_target_price(&self, current_price: f64) -> Option<f64> {
        if !current_price.is_finite() || current_price <= 0.0 {
            return None;
        }
        Some((current_price * 0.9).floor().max(1.0))
    }
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
