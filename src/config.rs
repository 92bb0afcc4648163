use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::parser::{DEFAULT_LATENCY_MARKER, DEFAULT_TIME_FORMAT};

const DEFAULT_CONFIG_PATH: &str = "lcrail-bench.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Results root: `<root>/<benchmark>/<part>/<device>/<file>`.
    #[serde(default = "default_root")]
    pub root: String,
    /// Benchmarked process name; the CLI positional overrides it.
    #[serde(default)]
    pub process: Option<String>,
    /// Only files with this extension are scanned. Empty matches every file.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            process: None,
            extension: default_extension(),
        }
    }
}

fn default_root() -> String {
    "results".into()
}

fn default_extension() -> String {
    "txt".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    /// Refresh-time lines must contain this to be candidates. Empty makes every
    /// three-field comma line a candidate.
    #[serde(default = "default_latency_marker")]
    pub latency_marker: String,
    /// chrono format of the nethogs/top time-of-day column.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            latency_marker: default_latency_marker(),
            time_format: default_time_format(),
        }
    }
}

fn default_latency_marker() -> String {
    DEFAULT_LATENCY_MARKER.into()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.into()
}

/// Chart slot order. Identifiers found on disk but missing here are fatal when summarizing.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_benchmarks")]
    pub benchmarks: Vec<String>,
    #[serde(default = "default_devices")]
    pub devices: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            benchmarks: default_benchmarks(),
            devices: default_devices(),
        }
    }
}

fn default_benchmarks() -> Vec<String> {
    vec!["original".into(), "rt-poll".into(), "rt-sse".into()]
}

fn default_devices() -> Vec<String> {
    vec!["jolla-1".into(), "xperia-x".into()]
}

impl AppConfig {
    /// Reads `CONFIG_FILE`, else `lcrail-bench.toml` when present, else defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_PATH)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.input.root.is_empty(), "input.root must be non-empty");
        if let Some(process) = &self.input.process {
            anyhow::ensure!(
                !process.is_empty(),
                "input.process must be non-empty when set"
            );
        }
        anyhow::ensure!(
            !self.parsing.time_format.is_empty(),
            "parsing.time_format must be non-empty"
        );
        check_layout_list("layout.benchmarks", &self.layout.benchmarks)?;
        check_layout_list("layout.devices", &self.layout.devices)?;
        Ok(())
    }
}

fn check_layout_list(name: &str, entries: &[String]) -> anyhow::Result<()> {
    anyhow::ensure!(!entries.is_empty(), "{} must list at least one entry", name);
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        anyhow::ensure!(!entry.is_empty(), "{} entries must be non-empty", name);
        anyhow::ensure!(
            seen.insert(entry.as_str()),
            "{} contains duplicate entry {:?}",
            name,
            entry
        );
    }
    Ok(())
}
