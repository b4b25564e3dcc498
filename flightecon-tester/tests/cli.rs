use std::process::Command;

const DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dataset.json");
const SETTINGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/settings.json");

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "flightecon-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn tester() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flightecon-tester"));
    cmd.args(["--dataset", DATASET]);
    cmd
}

fn json_output(label: &str, args: &[&str]) -> serde_json::Value {
    let output_path = temp_path(label);
    let status = tester()
        .args(args)
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success(), "{args:?} failed");
    let content = std::fs::read_to_string(output_path).expect("read output");
    serde_json::from_str(&content).expect("valid json")
}

#[test]
fn cli_route_writes_json_report() {
    let report = json_output("route", &["route", "HKG", "LHR", "a388"]);
    assert_eq!(report["report"], "route");
    assert_eq!(report["origin"], "HKG");
    let route = &report["route"];
    assert!(route["valid"].is_boolean());
    assert!(route["warnings"].is_array());
    assert_eq!(route["needs_stopover"], false);
}

#[test]
fn cli_destinations_respect_limit() {
    let report = json_output("destinations", &["destinations", "HKG", "a320", "--limit", "3"]);
    assert_eq!(report["report"], "destinations");
    let destinations = report["destinations"].as_array().expect("array");
    assert!(destinations.len() <= 3);
    for dest in destinations {
        assert_eq!(dest["route"]["valid"], true);
    }
}

#[test]
fn cli_realism_settings_file_is_applied() {
    let output_path = temp_path("markdown");
    let status = tester()
        .args(["route", "FRA", "INN", "a320", "--settings", SETTINGS])
        .args(["--report", "markdown", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.starts_with("# Route FRA -> INN (a320)"));
}

#[test]
fn cli_brute_reports_pax_outcome() {
    let report = json_output("brute", &["brute", "HKG", "SIN", "g650"]);
    assert_eq!(report["report"], "brute");
    assert_eq!(report["outcome"]["kind"], "pax");
    assert!(report["outcome"]["best"]["max_income"].as_f64().is_some());
}

#[test]
fn cli_verify_passes_on_small_sweep() {
    let report = json_output("verify", &["verify", "--cases", "5", "--max-capacity", "18"]);
    assert_eq!(report["report"], "verify");
    assert_eq!(report["violations"].as_array().map(Vec::len), Some(0));
    assert_eq!(report["cases"].as_array().map(Vec::len), Some(5));
}

#[test]
fn cli_verify_covers_cargo_and_enforces_ratio_floor() {
    let report = json_output("verify-cargo", &["verify", "--cases", "4"]);
    assert_eq!(report["cargo_cases"].as_array().map(Vec::len), Some(4));
    for case in report["cargo_cases"].as_array().expect("array") {
        let split = &case["closed_form"];
        assert_eq!(split["l"].as_u64().zip(split["h"].as_u64()).map(|(l, h)| l + h), Some(100));
    }

    // Closed-form income never exceeds the reference, so a floor above 1 must fail.
    let output = tester()
        .args(["verify", "--cases", "4", "--min-ratio", "2"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("verification violation"));
}

#[test]
fn cli_brute_reports_cargo_closed_form() {
    let report = json_output("brute-cargo", &["brute", "HKG", "LHR", "b744f"]);
    assert_eq!(report["outcome"]["kind"], "cargo");
    let closed = &report["outcome"]["closed"];
    assert_eq!(closed["l"].as_u64().zip(closed["h"].as_u64()).map(|(l, h)| l + h), Some(100));
    assert!(report["outcome"]["closed_form_income"].as_f64().is_some());
}

#[test]
fn cli_unknown_airport_fails_with_context() {
    let output = tester()
        .args(["route", "HKG", "ZZZ", "a388"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot assemble HKG -> ZZZ"));
}

#[test]
fn cli_missing_dataset_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_flightecon-tester"))
        .args(["--dataset", "/nonexistent/dataset.json", "route", "A", "B", "c"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read dataset"));
}
