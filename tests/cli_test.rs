use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn qualityrate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qualityrate"));
    cmd.env_remove("QUALITYRATE_CONFIG")
        .env_remove("QUALITYRATE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn metrics_lists_the_catalog() {
    let dir = TempDir::new().unwrap();
    let output = qualityrate()
        .current_dir(dir.path())
        .arg("metrics")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("sqale_rating"));
    assert!(stdout.contains("security_hotspots_reviewed"));
}

#[test]
fn init_then_validate_config() {
    let dir = TempDir::new().unwrap();
    qualityrate().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".qualityrate.toml").exists());

    // second init refuses to overwrite
    qualityrate().current_dir(dir.path()).arg("init").assert().failure();

    let output = qualityrate()
        .current_dir(dir.path())
        .arg("validate-config")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("A <= 0.05"));
}

#[test]
fn invalid_grid_fails_validation() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[rating]\ndebt_rating_grid = \"0.5,0.1\"\n").unwrap();

    qualityrate()
        .arg("validate-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn analyze_prints_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    fs::write(
        &snapshot,
        r#"{ "root": { "ref": 1, "type": "PROJECT", "key": "p" },
             "measures": [ { "component": 1, "metric": "ncloc", "value": 10 },
                           { "component": 1, "metric": "sqale_index", "value": 100 } ] }"#,
    )
    .unwrap();

    let output = qualityrate()
        .current_dir(dir.path())
        .args(["analyze", "--format", "json"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rating = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["metric"] == "sqale_rating")
        .unwrap();
    assert_eq!(rating["rating"], "D");
}
