//! Integration tests for the shamsi binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Timezones far apart enough that a shifted hour would show.
const TIMEZONES: [&str; 3] = ["Asia/Tehran", "America/Los_Angeles", "UTC"];

/// A command isolated from the user's real config file.
fn shamsi(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("shamsi");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("SHAMSI_DATE_ONLY")
        .env_remove("SHAMSI_COLUMN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_convert_prints_jalaali_date() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["convert", "1979-03-21"])
        .assert()
        .success()
        .stdout("1358-01-01\n");
}

#[test]
fn test_convert_json() {
    let home = TempDir::new().unwrap();
    let output = shamsi(&home)
        .args(["convert", "2025-03-21", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["jalaali"]["year"], 1404);
    assert_eq!(value["jalaali"]["month"], 1);
    assert_eq!(value["jalaali"]["day"], 1);
    assert_eq!(value["gregorian"]["year"], 2025);
}

#[test]
fn test_convert_rejects_invalid_date() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["convert", "2025-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_to_gregorian() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["to-gregorian", "1403-12-30"])
        .assert()
        .success()
        .stdout("2025-03-20\n");
}

#[test]
fn test_to_gregorian_rejects_missing_leap_day() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["to-gregorian", "1404-12-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid Jalaali date"));
}

#[test]
fn test_format_preserves_literal_time_in_every_timezone() {
    let home = TempDir::new().unwrap();
    for tz in TIMEZONES {
        shamsi(&home)
            .env("TZ", tz)
            .args([
                "format",
                "2025-11-04T23:45",
                "2025-11-04T23:45:00Z",
                "2025-11-04T23:45:00+0330",
            ])
            .assert()
            .success()
            .stdout("1404-08-13 11:45 PM\n1404-08-13 11:45 PM\n1404-08-13 11:45 PM\n");
    }
}

#[test]
fn test_format_invalid_prints_empty_line() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["format", "not-a-date", "2024-03-20T00:10"])
        .assert()
        .success()
        .stdout("\n1403-01-01 12:10 AM\n")
        .stderr(predicate::str::contains("Could not parse timestamp"));
}

#[test]
fn test_format_date_only_flag() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["format", "--date-only", "2025-11-04T23:45"])
        .assert()
        .success()
        .stdout("1404-08-13\n");
}

#[test]
fn test_format_date_only_from_env() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .env("SHAMSI_DATE_ONLY", "true")
        .args(["format", "2025-11-04T23:45"])
        .assert()
        .success()
        .stdout("1404-08-13\n");
}

#[test]
fn test_batch_annotates_csv_file() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("trips.csv");
    let output = dir.path().join("trips.jalaali.csv");
    fs::write(
        &input,
        "company,route,departure_time\nSeir,Tehran-Mashhad,2025-11-04T23:45\nPayam,Qom-Kashan,\n",
    )
    .unwrap();

    shamsi(&home)
        .arg("batch")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 converted"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "company,route,departure_time,jalaali\n\
         Seir,Tehran-Mashhad,2025-11-04T23:45,1404-08-13 11:45 PM\n\
         Payam,Qom-Kashan,,\n"
    );
}

#[test]
fn test_batch_reads_stdin() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["batch", "-", "--column", "departs_at", "--date-only"])
        .write_stdin("id,departs_at\n7,2024-03-20T06:00\n")
        .assert()
        .success()
        .stdout("id,departs_at,jalaali\n7,2024-03-20T06:00,1403-01-01\n");
}

#[test]
fn test_batch_missing_column_fails() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["batch", "-"])
        .write_stdin("id,departs_at\n7,2024-03-20T06:00\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("column 'departure_time' not found"));
}

#[test]
fn test_batch_missing_column_keeps_output_untouched() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("trips.csv");
    let existing = dir.path().join("existing.csv");
    let fresh = dir.path().join("fresh.csv");
    fs::write(&input, "id,departs_at\n7,2024-03-20T06:00\n").unwrap();
    fs::write(&existing, "previous run\n").unwrap();

    for output in [&existing, &fresh] {
        shamsi(&home)
            .arg("batch")
            .arg(&input)
            .arg("--output")
            .arg(output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("column 'departure_time' not found"));
    }

    assert_eq!(fs::read_to_string(&existing).unwrap(), "previous run\n");
    assert!(!fresh.exists());
}

#[test]
fn test_batch_missing_file_fails() {
    let home = TempDir::new().unwrap();
    shamsi(&home)
        .args(["batch", "/nonexistent/trips.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("shamsi");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[format]\ndate_only = true\n\n[batch]\ncolumn = \"departs_at\"\n",
    )
    .unwrap();

    shamsi(&home)
        .args(["format", "2025-11-04T23:45"])
        .assert()
        .success()
        .stdout("1404-08-13\n");

    shamsi(&home)
        .args(["batch", "-"])
        .write_stdin("departs_at\n2025-11-04T23:45\n")
        .assert()
        .success()
        .stdout("departs_at,jalaali\n2025-11-04T23:45,1404-08-13\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();

    shamsi(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(home.path().join("shamsi").join("config.toml").exists());

    shamsi(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("column = \"departure_time\""));
}

#[cfg(target_os = "linux")]
#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("shamsi");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[batch]\ncolumn = \"\"\n").unwrap();

    shamsi(&home)
        .args(["format", "2025-11-04T23:45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch.column must not be empty"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_date_only_false_overrides_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("shamsi");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[format]\ndate_only = true\n").unwrap();

    shamsi(&home)
        .args(["format", "--date-only=false", "2025-11-04T23:45"])
        .assert()
        .success()
        .stdout("1404-08-13 11:45 PM\n");

    shamsi(&home)
        .env("SHAMSI_DATE_ONLY", "false")
        .args(["format", "2025-11-04T23:45"])
        .assert()
        .success()
        .stdout("1404-08-13 11:45 PM\n");

    shamsi(&home)
        .args(["batch", "-", "--date-only=false"])
        .write_stdin("departure_time\n2025-11-04T23:45\n")
        .assert()
        .success()
        .stdout("departure_time,jalaali\n2025-11-04T23:45,1404-08-13 11:45 PM\n");
}
