#![cfg(feature = "vies")]

// Offline tests only — the wire format and error surface, no network.

use chrono::NaiveDate;
use piva::vies::{ViesCheck, ViesClient, ViesError};

fn sample_check() -> ViesCheck {
    ViesCheck {
        country_code: "IT".into(),
        vat_number: "00743110157".into(),
        valid: true,
        request_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        request_identifier: Some("WAPIAAAAYxxxxxxx".into()),
        name: Some("ACME S.R.L.".into()),
        address: Some("VIA ROMA 1 \n00100 ROMA RM".into()),
        trader_name: None,
        trader_company_type: None,
        trader_street: None,
        trader_postcode: None,
        trader_city: None,
        trader_name_match: None,
        trader_company_type_match: None,
        trader_street_match: None,
        trader_postcode_match: None,
        trader_city_match: None,
    }
}

#[test]
fn client_builds() {
    assert!(ViesClient::new().is_ok());
}

#[test]
fn client_wraps_custom_reqwest_client() {
    let inner = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();
    let _client = ViesClient::with_client(inner);
}

#[test]
fn check_roundtrips_through_serde() {
    let check = sample_check();
    let json = serde_json::to_string(&check).unwrap();
    let back: ViesCheck = serde_json::from_str(&json).unwrap();
    assert_eq!(back, check);
}

#[test]
fn check_serializes_dates_as_iso() {
    let json = serde_json::to_string(&sample_check()).unwrap();
    assert!(json.contains("\"request_date\":\"2024-06-15\""));
}

#[test]
fn error_display() {
    let e = ViesError::Network("timeout".into());
    assert!(e.to_string().contains("VIES network error"));
    assert!(e.to_string().contains("timeout"));

    let e = ViesError::Api("MS_MAX_CONCURRENT_REQ".into());
    assert!(e.to_string().contains("MS_MAX_CONCURRENT_REQ"));

    let e = ViesError::Parse("expected value at line 1".into());
    assert!(e.to_string().contains("VIES parse error"));
}

#[test]
fn error_is_cloneable() {
    // Batch joins fan one failure out to every row sharing the key
    let e = ViesError::Api("MS_UNAVAILABLE".into());
    let e2 = e.clone();
    assert_eq!(e.to_string(), e2.to_string());
}

#[test]
fn error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&ViesError::Network("x".into()));
}
