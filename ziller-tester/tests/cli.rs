use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "ziller-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_ziller-tester")
}

#[test]
fn cli_list_sweeps_writes_output() {
    let output_path = temp_path("list");
    let status = Command::new(exe())
        .args(["--list-sweeps", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available sweeps"));
    assert!(content.contains("friday-conflict"));
}

#[test]
fn cli_sweep_passes_with_default_rules() {
    let output_path = temp_path("sweep");
    let status = Command::new(exe())
        .args(["--mode", "sweep", "--year", "2026", "--years", "2", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let results = results.as_array().expect("array of sweeps");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r["passed"] == true && r["days_checked"] == 365 * 2));
}

#[test]
fn cli_calendar_markdown_names_the_month() {
    let output = Command::new(exe())
        .args(["--mode", "calendar", "--month", "2026-12", "--today", "2026-10-15", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Dezember 2026"), "{stdout}");
    assert!(stdout.contains("| 24.12.2026 | Donnerstag | ja | ja | 17 |  |"), "{stdout}");
    assert!(stdout.contains("| 25.12.2026 | Freitag | nein | nein | 0 |"), "{stdout}");
}

#[test]
fn cli_check_reports_friday_conflict() {
    let output = Command::new(exe())
        .args([
            "--mode", "check", "--date", "13.02.2026", "--time", "15:00", "--today", "2026-02-09", "--report",
            "json",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json outcome");
    assert_eq!(outcome["bookable"], true);
    assert_eq!(outcome["time_kept"], false);
    assert_eq!(outcome["clears_date"], true);
}

#[test]
fn cli_uses_config_file() {
    let config_path = temp_path("config.json");
    std::fs::write(&config_path, r#"{ "holidays": [], "booking_lead_days": 0 }"#).expect("write config");
    let output = Command::new(exe())
        .args(["--mode", "check", "--date", "2026-12-25", "--today", "2026-12-25", "--report", "json", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json outcome");
    assert_eq!(outcome["selectable"], true);
    assert_eq!(outcome["bookable"], true);
}

#[test]
fn cli_rejects_bad_config() {
    let config_path = temp_path("broken.json");
    std::fs::write(&config_path, "{ not json").expect("write config");
    let output = Command::new(exe())
        .args(["--mode", "sweep", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parsing shop configuration"), "{stderr}");
}
