//! End-to-end tests for the `pt` binary.
//!
//! Every test seeds today's cache so no network access is needed. The API
//! base URL points at an unroutable host so an unexpected fetch fails loudly.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::{Local, NaiveDate};
use serde_json::json;
use tempfile::TempDir;

fn pt_binary() -> String {
    env!("CARGO_BIN_EXE_pt").to_string()
}

/// Writes a cache for `day` with the given timings and returns its path.
fn seed_cache(temp: &Path, timings: &serde_json::Value, day: NaiveDate) -> PathBuf {
    let body = json!({
        "code": 200,
        "status": "OK",
        "data": {
            "timings": timings,
            "date": {
                "readable": day.format("%d %b %Y").to_string(),
                "hijri": {
                    "day": "6",
                    "month": {"number": 5, "en": "Jumada al-Ula"},
                    "year": "1448"
                }
            }
        }
    });
    let path = temp.join("prayer_cache.json");
    std::fs::write(&path, serde_json::to_string_pretty(&body).unwrap()).unwrap();
    path
}

/// Seeds today's cache and runs `f` against it.
///
/// If the local date changes during the run, the binary saw a stale cache,
/// so the cache is reseeded for the new day and `f` runs again.
fn with_todays_cache(
    temp: &Path,
    timings: &serde_json::Value,
    f: impl Fn(&Path) -> Output,
) -> Output {
    loop {
        let today = Local::now().date_naive();
        let cache = seed_cache(temp, timings, today);
        let output = f(&cache);
        if Local::now().date_naive() == today {
            return output;
        }
    }
}

fn full_day() -> serde_json::Value {
    json!({
        "Fajr": "04:15 (BST)",
        "Sunrise": "05:45 (BST)",
        "Dhuhr": "12:30 (BST)",
        "Asr": "16:00 (BST)",
        "Sunset": "19:15 (BST)",
        "Maghrib": "19:15 (BST)",
        "Isha": "20:30 (BST)",
        "Imsak": "04:05 (BST)",
        "Midnight": "00:22 (BST)"
    })
}

fn run_pt(temp: &Path, cache: &Path, args: &[&str]) -> Output {
    Command::new(pt_binary())
        .env("HOME", temp)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_CACHE_HOME")
        .env_remove("RUST_LOG")
        .env("PT_CACHE_PATH", cache)
        .env("PT_API_BASE_URL", "http://invalid.invalid")
        .env("PT_CITY", "London")
        .env("PT_COUNTRY", "United Kingdom")
        .args(args)
        .output()
        .expect("failed to run pt")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "pt should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_default_output_from_cache() {
    let temp = TempDir::new().unwrap();
    let output = stdout(&with_todays_cache(temp.path(), &full_day(), |cache| {
        run_pt(temp.path(), cache, &[])
    }));
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4, "unexpected output: {output}");
    assert!(lines[0].ends_with(" Time"));
    assert!(lines[1].contains(" in "));
    assert!(lines[1].ends_with(" AM") || lines[1].ends_with(" PM"));
    assert_eq!(lines[2], "6th Jumada al-Ula 1448 A.H.");
    assert_eq!(lines[3], "");
}

#[test]
fn test_short_output_is_single_line() {
    let temp = TempDir::new().unwrap();
    let output = stdout(&with_todays_cache(temp.path(), &full_day(), |cache| {
        run_pt(temp.path(), cache, &["-a"])
    }));

    assert_eq!(output.lines().count(), 1);
    let (name, rest) = output.trim_end().split_once(" in ").unwrap();
    assert!(
        ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"].contains(&name),
        "unexpected prayer: {name}"
    );
    assert!(rest.contains("Minute") || rest == "less than a minute");
}

#[test]
fn test_times_lists_recognised_prayers() {
    let temp = TempDir::new().unwrap();
    let output = stdout(&with_todays_cache(temp.path(), &full_day(), |cache| {
        run_pt(temp.path(), cache, &["times"])
    }));

    assert!(output.starts_with("Prayer times for "));
    assert_eq!(output.lines().count(), 7);
    assert_eq!(output.matches('*').count(), 1);
    assert!(!output.contains("Imsak"));
    assert!(!output.contains("Sunset"));
}

#[test]
fn test_times_json() {
    let temp = TempDir::new().unwrap();
    let output = stdout(&with_todays_cache(temp.path(), &full_day(), |cache| {
        run_pt(temp.path(), cache, &["times", "--json"])
    }));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 6);
    assert_eq!(value[0], json!({"name": "Fajr", "time": "04:15:00"}));
    assert_eq!(value[5], json!({"name": "Isha", "time": "20:30:00"}));
}

#[test]
fn test_no_recognised_prayers_fails() {
    let temp = TempDir::new().unwrap();
    let timings = json!({"Imsak": "04:05", "Fajr": "not a time"});

    let output = with_todays_cache(temp.path(), &timings, |cache| {
        run_pt(temp.path(), cache, &[])
    });

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no prayer times available"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_stale_cache_triggers_fetch() {
    let temp = TempDir::new().unwrap();
    let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let cache = seed_cache(temp.path(), &full_day(), day);
    let stale = std::fs::read_to_string(&cache).unwrap();

    let output = run_pt(temp.path(), &cache, &["-a"]);

    // The fetch goes to an unroutable host, so the command must fail.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to fetch prayer timings"),
        "unexpected stderr: {stderr}"
    );
    assert_eq!(std::fs::read_to_string(&cache).unwrap(), stale);
}

#[test]
fn test_config_file_is_honoured() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pt.toml");

    // No PT_* variables: the cache path and location come from the file.
    let output = with_todays_cache(temp.path(), &full_day(), |cache| {
        std::fs::write(
            &config,
            format!(
                "city = \"London\"\ncountry = \"United Kingdom\"\ncache_path = {:?}\napi_base_url = \"http://invalid.invalid\"\n",
                cache.display().to_string()
            ),
        )
        .unwrap();
        Command::new(pt_binary())
            .env("HOME", temp.path())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("XDG_CACHE_HOME")
            .env_remove("PT_CACHE_PATH")
            .arg("--config")
            .arg(&config)
            .arg("-a")
            .output()
            .expect("failed to run pt")
    });

    assert_eq!(stdout(&output).lines().count(), 1);
}
