//! Aladhan API integration for the prayer time tracker.
//!
//! Fetches the day's prayer timings and Hijri date for a city. The response
//! model is also the on-disk cache format, so it serializes back to the same
//! shape the API returns.

use std::collections::BTreeMap;
use std::time::Duration;

use pt_core::HijriDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The query is missing required fields.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// API returned an error response.
    #[error("API error: {message}")]
    Api { message: String },
    /// Failed to parse response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Location and calculation settings for a timings request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityQuery {
    pub city: String,
    pub country: String,
    /// Calculation method ID (e.g. 2 for ISNA, 3 for MWL).
    pub method: u8,
    /// Juristic school for Asr: 0 for Shafi, 1 for Hanafi.
    pub school: u8,
}

impl CityQuery {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.city.trim().is_empty() {
            return Err(ApiError::InvalidQuery {
                reason: "city cannot be empty",
            });
        }
        if self.country.trim().is_empty() {
            return Err(ApiError::InvalidQuery {
                reason: "country cannot be empty",
            });
        }
        Ok(())
    }
}

/// Aladhan API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a new client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self { http, base_url })
    }

    /// Creates a client against the public Aladhan API.
    pub fn aladhan() -> Result<Self, ApiError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Fetches today's timings for a city.
    pub async fn timings_by_city(&self, query: &CityQuery) -> Result<TimingsResponse, ApiError> {
        query.validate()?;

        let url = self.timings_url();
        tracing::debug!(%url, city = %query.city, country = %query.country, "fetching timings");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(parse_api_error(&body).unwrap_or_else(|| ApiError::Api {
                message: format!("status {status}: {body}"),
            }));
        }

        parse_timings(&body)
    }

    fn timings_url(&self) -> String {
        format!("{}/timingsByCity", self.base_url)
    }
}

/// Response body of the `timingsByCity` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingsResponse {
    pub data: DayData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayData {
    /// Raw timings keyed by name, e.g. `"Fajr": "04:15 (BST)"`.
    pub timings: BTreeMap<String, String>,
    pub date: DateInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    /// Gregorian date as `02 Jan 2006`.
    pub readable: String,
    pub hijri: Hijri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hijri {
    pub day: String,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriMonth {
    pub en: String,
}

impl TimingsResponse {
    pub fn timings(&self) -> &BTreeMap<String, String> {
        &self.data.timings
    }

    pub fn readable_date(&self) -> &str {
        &self.data.date.readable
    }

    pub fn hijri_date(&self) -> HijriDate {
        let hijri = &self.data.date.hijri;
        HijriDate {
            day: hijri.day.clone(),
            month: hijri.month.en.clone(),
            year: hijri.year.clone(),
        }
    }
}

/// Parses a successful `timingsByCity` body.
pub fn parse_timings(body: &str) -> Result<TimingsResponse, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}

fn parse_api_error(body: &str) -> Option<ApiError> {
    // Errors carry the message in `data` as a plain string.
    #[derive(Deserialize)]
    struct ErrorPayload {
        data: String,
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .map(|payload| ApiError::Api {
            message: payload.data,
        })
}
