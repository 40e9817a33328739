//! VIES REST API client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::VatRegistry;
use crate::core::split_vat;

/// Result of a VIES registry check.
///
/// Trader fields are whatever the member state chose to disclose; VIES
/// placeholder values (`"---"`, blanks) come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesCheck {
    /// 2-letter country prefix the lookup ran against.
    pub country_code: String,
    /// Number part without the prefix.
    pub vat_number: String,
    /// Whether the registry considers the number currently valid.
    pub valid: bool,
    /// Date the registry answered.
    pub request_date: Option<NaiveDate>,
    /// Consultation number, quotable as proof of the check.
    pub request_identifier: Option<String>,
    /// Registered company name.
    pub name: Option<String>,
    /// Registered address as a single block.
    pub address: Option<String>,
    pub trader_name: Option<String>,
    pub trader_company_type: Option<String>,
    pub trader_street: Option<String>,
    pub trader_postcode: Option<String>,
    pub trader_city: Option<String>,
    /// Match indicators for approximate queries ("VALID", "INVALID",
    /// "NOT_PROCESSED").
    pub trader_name_match: Option<String>,
    pub trader_company_type_match: Option<String>,
    pub trader_street_match: Option<String>,
    pub trader_postcode_match: Option<String>,
    pub trader_city_match: Option<String>,
}

/// Error from the VIES API.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Network or HTTP transport error.
    #[error("VIES network error: {0}")]
    Network(String),
    /// The VIES API returned an error (e.g. member state unavailable).
    #[error("VIES API error: {0}")]
    Api(String),
    /// Failed to parse the response.
    #[error("VIES parse error: {0}")]
    Parse(String),
}

const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    country_code: Option<String>,
    vat_number: Option<String>,
    valid: Option<bool>,
    request_date: Option<String>,
    request_identifier: Option<String>,
    name: Option<String>,
    address: Option<String>,
    trader_name: Option<String>,
    trader_company_type: Option<String>,
    trader_street: Option<String>,
    trader_postcode: Option<String>,
    trader_city: Option<String>,
    trader_name_match: Option<String>,
    trader_company_type_match: Option<String>,
    trader_street_match: Option<String>,
    trader_postcode_match: Option<String>,
    trader_city_match: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest {
    country_code: String,
    vat_number: String,
}

/// Handle around the VIES REST API.
///
/// Owns its HTTP client; construct once and share by reference. The
/// service requires no authentication.
#[derive(Debug, Clone)]
pub struct ViesClient {
    client: reqwest::Client,
}

impl ViesClient {
    /// Build a client with a 30 second request timeout.
    pub fn new() -> Result<Self, ViesError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client` (custom timeouts, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Check a VAT number against the registry.
    ///
    /// `country_code` is the 2-letter prefix (e.g. "IT"), `vat_number`
    /// the part without it.
    ///
    /// # Errors
    ///
    /// [`ViesError::Network`] on connection issues, [`ViesError::Api`]
    /// if the API reports an error (e.g. a member state is down),
    /// [`ViesError::Parse`] on unexpected response formats.
    pub async fn check(&self, country_code: &str, vat_number: &str) -> Result<ViesCheck, ViesError> {
        let req = ViesRequest {
            country_code: country_code.to_uppercase(),
            vat_number: vat_number.to_string(),
        };

        let resp = self
            .client
            .post(VIES_URL)
            .json(&req)
            .send()
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ViesError::Api(format!("HTTP {status}: {body}")));
        }

        let api_resp: ViesApiResponse = serde_json::from_str(&body)
            .map_err(|e: serde_json::Error| ViesError::Parse(e.to_string()))?;

        // Check for API-level errors
        if let Some(ref errors) = api_resp.error_wrappers {
            if let Some(err) = errors.first() {
                let msg = err
                    .message
                    .clone()
                    .or_else(|| err.error.clone())
                    .unwrap_or_else(|| "unknown error".into());
                return Err(ViesError::Api(msg));
            }
        }

        Ok(into_check(api_resp, &req.country_code, &req.vat_number))
    }

    /// Check a composite identifier (e.g. "IT00743110157").
    ///
    /// The prefix is recognized by scanning the EU table; an unprefixed
    /// number is treated as Italian.
    pub async fn check_euvat(&self, euvat: &str) -> Result<ViesCheck, ViesError> {
        let (country_code, vat_number) = split_vat(euvat.trim());
        self.check(country_code, vat_number).await
    }
}

impl VatRegistry for ViesClient {
    async fn lookup(&self, country_code: &str, vat_number: &str) -> Result<ViesCheck, ViesError> {
        self.check(country_code, vat_number).await
    }
}

/// One-shot check with a freshly built client.
pub async fn check_vies(country_code: &str, vat_number: &str) -> Result<ViesCheck, ViesError> {
    ViesClient::new()?.check(country_code, vat_number).await
}

fn into_check(resp: ViesApiResponse, country_code: &str, vat_number: &str) -> ViesCheck {
    ViesCheck {
        country_code: resp.country_code.unwrap_or_else(|| country_code.into()),
        vat_number: resp.vat_number.unwrap_or_else(|| vat_number.into()),
        valid: resp.valid.unwrap_or(false),
        request_date: resp.request_date.as_deref().and_then(parse_request_date),
        request_identifier: clean(resp.request_identifier),
        name: clean(resp.name),
        address: clean(resp.address),
        trader_name: clean(resp.trader_name),
        trader_company_type: clean(resp.trader_company_type),
        trader_street: clean(resp.trader_street),
        trader_postcode: clean(resp.trader_postcode),
        trader_city: clean(resp.trader_city),
        trader_name_match: clean(resp.trader_name_match),
        trader_company_type_match: clean(resp.trader_company_type_match),
        trader_street_match: clean(resp.trader_street_match),
        trader_postcode_match: clean(resp.trader_postcode_match),
        trader_city_match: clean(resp.trader_city_match),
    }
}

/// Filter VIES placeholder values.
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "---" && !v.trim().is_empty())
}

/// The API reports request dates as full timestamps
/// ("2024-01-15T00:00:00.000Z"); only the date part is meaningful.
fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
