// Config loading and validation tests

use lcrail_bench::config::AppConfig;

const VALID_CONFIG: &str = r#"
[input]
root = "bench/results"
process = "harbour-lcrail"
extension = "txt"

[parsing]
latency_marker = "$"
time_format = "%H:%M:%S"

[layout]
benchmarks = ["original", "rt-poll", "rt-sse"]
devices = ["jolla-1", "xperia-x"]
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.input.root, "bench/results");
    assert_eq!(config.input.process.as_deref(), Some("harbour-lcrail"));
    assert_eq!(config.parsing.latency_marker, "$");
    assert_eq!(config.layout.benchmarks.len(), 3);
    assert_eq!(config.layout.devices, vec!["jolla-1", "xperia-x"]);
}

#[test]
fn test_config_defaults_when_empty() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.input.root, "results");
    assert_eq!(config.input.process, None);
    assert_eq!(config.input.extension, "txt");
    assert_eq!(config.parsing.latency_marker, "$");
    assert_eq!(config.parsing.time_format, "%H:%M:%S");
    assert_eq!(config.layout.benchmarks, vec!["original", "rt-poll", "rt-sse"]);
}

#[test]
fn test_config_validation_rejects_empty_root() {
    let bad = VALID_CONFIG.replace("root = \"bench/results\"", "root = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("input.root"));
}

#[test]
fn test_config_validation_rejects_empty_process() {
    let bad = VALID_CONFIG.replace("process = \"harbour-lcrail\"", "process = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("input.process"));
}

#[test]
fn test_config_accepts_empty_marker() {
    let cfg = VALID_CONFIG.replace("latency_marker = \"$\"", "latency_marker = \"\"");
    let config = AppConfig::load_from_str(&cfg).expect("empty marker is valid");
    assert_eq!(config.parsing.latency_marker, "");
}

#[test]
fn test_config_validation_rejects_empty_time_format() {
    let bad = VALID_CONFIG.replace("time_format = \"%H:%M:%S\"", "time_format = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("time_format"));
}

#[test]
fn test_config_validation_rejects_empty_layout() {
    let bad = VALID_CONFIG.replace(
        "devices = [\"jolla-1\", \"xperia-x\"]",
        "devices = []",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("layout.devices"));
}

#[test]
fn test_config_validation_rejects_duplicate_layout_entries() {
    let bad = VALID_CONFIG.replace(
        "benchmarks = [\"original\", \"rt-poll\", \"rt-sse\"]",
        "benchmarks = [\"original\", \"original\"]",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("lcrail-bench.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.input.root, "bench/results");
}

#[test]
fn test_config_load_from_missing_path_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = AppConfig::load_from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
