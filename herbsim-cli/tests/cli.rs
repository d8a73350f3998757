use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "herbsim-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn write_config(label: &str, contents: &str) -> std::path::PathBuf {
    let path = temp_path(label);
    std::fs::write(&path, contents).expect("write config");
    path
}

const VALID_CONFIG: &str = r#"{
    "farming_level": 38,
    "compost": "ultracompost",
    "magic_secateurs": true,
    "kandarin_diary": "hard",
    "patches": ["ardougne", "catherby", "weiss"]
}"#;

#[test]
fn cli_runs_a_small_batch_and_prints_tables() {
    let exe = env!("CARGO_BIN_EXE_herbsim");
    let config_path = write_config("valid", VALID_CONFIG);
    let output = Command::new(exe)
        .arg(&config_path)
        .args(["--trials", "50", "--quiet"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Survival Rate"));
    assert!(stdout.contains("Toadflax"));
    // Level 38 cannot plant Irit and above.
    assert!(!stdout.contains("Irit"));
}

#[test]
fn cli_writes_json_report_to_output_path() {
    let exe = env!("CARGO_BIN_EXE_herbsim");
    let config_path = write_config("json", VALID_CONFIG);
    let output_path = temp_path("report");
    let status = Command::new(exe)
        .arg(&config_path)
        .args(["--trials", "25", "--report", "json", "--quiet", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(report["trials"], 25);
    assert_eq!(report["patches"][2]["key"], "weiss");
}

#[test]
fn cli_rejects_unknown_compost_before_running() {
    let exe = env!("CARGO_BIN_EXE_herbsim");
    let config_path = write_config(
        "bad-compost",
        r#"{"farming_level": 38, "compost": "megacompost", "patches": ["ardougne"]}"#,
    );
    let output = Command::new(exe)
        .arg(&config_path)
        .args(["--trials", "50", "--quiet"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
}

#[test]
fn cli_rejects_out_of_range_farming_level() {
    let exe = env!("CARGO_BIN_EXE_herbsim");
    let config_path = write_config(
        "bad-level",
        r#"{"farming_level": 120, "patches": ["ardougne"]}"#,
    );
    let output = Command::new(exe)
        .arg(&config_path)
        .args(["--trials", "10", "--quiet"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation") || stderr.contains("farming_level"));
}
