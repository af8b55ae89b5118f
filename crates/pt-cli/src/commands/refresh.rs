//! Refresh command for replacing the cached timings.

use std::io::Write;

use anyhow::Result;

use crate::{Config, cache};

/// Fetches today's timings and overwrites the cache.
pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let response = cache::fetch(config)?;
    cache::write(&config.cache_path, &response)?;
    tracing::info!(path = ?config.cache_path, date = response.readable_date(), "refreshed timings cache");

    writeln!(writer, "Timings for {}", response.readable_date())?;
    writeln!(writer, "Saved to:   {}", config.cache_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_fails_without_location_and_keeps_cache() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            cache_path: dir.path().join("prayer_cache.json"),
            ..Config::default()
        };
        std::fs::write(&config.cache_path, "previous").unwrap();

        let mut output = Vec::new();
        assert!(run(&mut output, &config).is_err());
        assert!(output.is_empty());
        assert_eq!(std::fs::read_to_string(&config.cache_path).unwrap(), "previous");
    }
}
