//! Daily timings cache.
//!
//! The API response is cached as JSON in `prayer_cache.json`. A cached
//! response is only reused on the day it was fetched for, judged by the
//! response's own readable Gregorian date.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pt_api::{Client, TimingsResponse};

use crate::Config;

/// Format of the API's readable date, e.g. `18 Oct 2026`.
const READABLE_DATE_FORMAT: &str = "%d %b %Y";

/// Loads today's cached timings.
///
/// Returns `None` if the file doesn't exist, can't be read or parsed, or
/// was fetched for another day.
pub fn read(path: &Path, today: NaiveDate) -> Option<TimingsResponse> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "ignoring unreadable cache");
            return None;
        }
    };

    let response = match pt_api::parse_timings(&content) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "ignoring unparseable cache");
            return None;
        }
    };

    let today = today.format(READABLE_DATE_FORMAT).to_string();
    if response.readable_date() != today {
        tracing::debug!(cached = response.readable_date(), %today, "cache is stale");
        return None;
    }

    Some(response)
}

/// Writes timings to the cache, creating its directory if needed.
pub fn write(path: &Path, response: &TimingsResponse) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("failed to create cache directory")?;
    }
    let json = serde_json::to_string_pretty(response).context("failed to serialize timings")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Fetches today's timings for the configured location.
pub fn fetch(config: &Config) -> Result<TimingsResponse> {
    let client = Client::new(&config.api_base_url).context("failed to create API client")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    runtime
        .block_on(client.timings_by_city(&config.query()))
        .context("failed to fetch prayer timings")
}

/// Returns today's timings from the cache, fetching and caching them on a miss.
///
/// Failing to write the cache is logged and does not fail the lookup.
pub fn load_or_fetch(config: &Config, today: NaiveDate) -> Result<TimingsResponse> {
    if let Some(cached) = read(&config.cache_path, today) {
        tracing::debug!(path = ?config.cache_path, "using cached timings");
        return Ok(cached);
    }

    let response = fetch(config)?;
    if let Err(e) = write(&config.cache_path, &response) {
        tracing::warn!(path = ?config.cache_path, error = %e, "failed to write cache");
    }
    Ok(response)
}
