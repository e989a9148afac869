// ═══════════════════════════════════════════════════════════════════
// Model Tests — PriceAlert, AlertEvaluation, FlightQuote, AlertConfig
// ═══════════════════════════════════════════════════════════════════

use chrono::{TimeZone, Utc};
use flight_alerts_core::config::{
    AlertConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STORAGE_KEY,
};
use flight_alerts_core::models::alert::{AlertEvaluation, PriceAlert};
use flight_alerts_core::models::quote::FlightQuote;

fn sample_alert() -> PriceAlert {
    PriceAlert {
        flight_id: "F1".into(),
        origin: "WAW".into(),
        destination: "JFK".into(),
        target_price: 300.0,
        current_price_at_creation: 350.0,
        currency: "USD".into(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PriceAlert
// ═══════════════════════════════════════════════════════════════════

mod price_alert {
    use super::*;

    #[test]
    fn new_copies_fields() {
        let alert = PriceAlert::new("F1", "WAW", "JFK", 300.0, 350.0, "USD");
        assert_eq!(alert.flight_id, "F1");
        assert_eq!(alert.origin, "WAW");
        assert_eq!(alert.destination, "JFK");
        assert_eq!(alert.target_price, 300.0);
        assert_eq!(alert.current_price_at_creation, 350.0);
        assert_eq!(alert.currency, "USD");
    }

    #[test]
    fn new_stamps_creation_time() {
        let before = Utc::now();
        let alert = PriceAlert::new("F1", "WAW", "JFK", 300.0, 350.0, "USD");
        let after = Utc::now();
        assert!(alert.created_at >= before && alert.created_at <= after);
    }

    #[test]
    fn route_label() {
        assert_eq!(sample_alert().route(), "WAW → JFK");
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample_alert()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "createdAt",
                "currency",
                "currentPriceAtCreation",
                "destination",
                "flightId",
                "origin",
                "targetPrice",
            ]
        );
        assert_eq!(obj["flightId"], "F1");
        assert_eq!(obj["targetPrice"], 300.0);
        assert_eq!(obj["createdAt"], "2025-01-15T10:00:00Z");
    }

    #[test]
    fn deserializes_stored_record() {
        let json = r#"{
            "flightId": "F1",
            "origin": "WAW",
            "destination": "JFK",
            "targetPrice": 300,
            "currentPriceAtCreation": 350,
            "currency": "USD",
            "createdAt": "2025-01-15T10:00:00Z"
        }"#;
        let alert: PriceAlert = serde_json::from_str(json).unwrap();
        assert_eq!(alert, sample_alert());
    }

    #[test]
    fn missing_field_is_rejected() {
        // Shape written by older builds: `dateCreated` instead of `createdAt`
        let json = r#"{
            "flightId": "F1",
            "origin": "WAW",
            "destination": "JFK",
            "targetPrice": 300,
            "currentPrice": 350,
            "currency": "USD",
            "dateCreated": "2025-01-15T10:00:00Z"
        }"#;
        assert!(serde_json::from_str::<PriceAlert>(json).is_err());
    }

    #[test]
    fn clone_and_eq() {
        let a = sample_alert();
        let b = a.clone();
        assert_eq!(a, b);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AlertEvaluation
// ═══════════════════════════════════════════════════════════════════

mod alert_evaluation {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(AlertEvaluation::NotApplicable.to_string(), "Not applicable");
        assert_eq!(AlertEvaluation::NotTriggered.to_string(), "Not triggered");
        assert_eq!(AlertEvaluation::Triggered.to_string(), "Triggered");
    }

    #[test]
    fn only_triggered_is_triggered() {
        assert!(AlertEvaluation::Triggered.is_triggered());
        assert!(!AlertEvaluation::NotTriggered.is_triggered());
        assert!(!AlertEvaluation::NotApplicable.is_triggered());
    }

    #[test]
    fn not_applicable_differs_from_not_triggered() {
        assert_ne!(AlertEvaluation::NotApplicable, AlertEvaluation::NotTriggered);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FlightQuote
// ═══════════════════════════════════════════════════════════════════

mod flight_quote {
    use super::*;

    #[test]
    fn currency_is_uppercased() {
        let q = FlightQuote::new("F1", 280.0, "usd");
        assert_eq!(q.currency, "USD");
    }

    #[test]
    fn price_in_same_currency() {
        let q = FlightQuote::new("F1", 280.0, "USD");
        assert_eq!(q.price_in("USD"), Some(280.0));
        assert_eq!(q.price_in("usd"), Some(280.0));
    }

    #[test]
    fn price_in_other_currency_is_unknown() {
        let q = FlightQuote::new("F1", 280.0, "EUR");
        assert_eq!(q.price_in("USD"), None);
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&FlightQuote::new("F1", 280.0, "USD")).unwrap();
        assert!(json.contains("\"flightId\":\"F1\""));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AlertConfig
// ═══════════════════════════════════════════════════════════════════

mod alert_config {
    use super::*;

    #[test]
    fn defaults() {
        let c = AlertConfig::default();
        assert_eq!(c.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(c.storage_key, "priceAlerts");
        assert_eq!(c.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(c.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(c.data_dir.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let c = AlertConfig {
            data_dir: Some("/tmp/alerts".into()),
            ..AlertConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: AlertConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    // All env-dependent assertions live in one test so parallel tests
    // never observe each other's variables.
    #[test]
    fn from_env_overrides_and_fallbacks() {
        std::env::set_var("FLIGHT_ALERTS_STORAGE_KEY", "alertsV2");
        std::env::set_var("FLIGHT_ALERTS_API_BASE_URL", "https://flights.example.com/api");
        std::env::set_var("FLIGHT_ALERTS_REQUEST_TIMEOUT_SECS", "not-a-number");
        std::env::set_var("FLIGHT_ALERTS_DATA_DIR", "/var/lib/alerts");

        let c = AlertConfig::from_env();
        assert_eq!(c.storage_key, "alertsV2");
        assert_eq!(c.api_base_url, "https://flights.example.com/api");
        assert_eq!(c.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(c.data_dir.as_deref(), Some(std::path::Path::new("/var/lib/alerts")));

        std::env::set_var("FLIGHT_ALERTS_REQUEST_TIMEOUT_SECS", "5");
        assert_eq!(AlertConfig::from_env().request_timeout_secs, 5);

        std::env::remove_var("FLIGHT_ALERTS_STORAGE_KEY");
        std::env::remove_var("FLIGHT_ALERTS_API_BASE_URL");
        std::env::remove_var("FLIGHT_ALERTS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("FLIGHT_ALERTS_DATA_DIR");
    }
}
