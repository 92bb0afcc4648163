// Result aggregation: walk `<root>/<benchmark>/<part>/<device>/<file>`, parse each file
// by its name and fold the series into the result tree. One file at a time, fully buffered.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crate::config::AppConfig;
use crate::models::{Issue, ResultTree};
use crate::parser::{
    DEFAULT_LATENCY_MARKER, DEFAULT_TIME_FORMAT, ParseContext, ParsedSeries, RecordKind,
};

/// Directory levels between the root and a result file, plus the file itself.
const PATH_DEPTH: usize = 4;

/// One result file with the metadata encoded in its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    pub path: PathBuf,
    pub benchmark: String,
    pub part: String,
    pub device: String,
    pub filename: String,
    pub kind: RecordKind,
}

impl ResultFile {
    /// Splits `path` below `root` into benchmark/part/device/filename.
    /// `None` when the path is not exactly four UTF-8 segments below `root`.
    pub fn from_path(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let segments: Vec<&str> = relative
            .iter()
            .map(|s| s.to_str())
            .collect::<Option<_>>()?;
        let [benchmark, part, device, filename] = segments.as_slice() else {
            return None;
        };
        Some(Self {
            path: path.to_path_buf(),
            benchmark: benchmark.to_string(),
            part: part.to_string(),
            device: device.to_string(),
            filename: filename.to_string(),
            kind: RecordKind::classify(filename),
        })
    }
}

/// Output of a full scan. `tree` is final; `issues` lists every reported line and file failure.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub tree: ResultTree,
    pub issues: Vec<Issue>,
    pub files_scanned: usize,
}

#[derive(Debug, Clone)]
pub struct Aggregator {
    process: String,
    extension: String,
    time_format: String,
    latency_marker: String,
}

impl Aggregator {
    /// Scans `.txt` files with the default time format and marker.
    pub fn new(process: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            extension: "txt".into(),
            time_format: DEFAULT_TIME_FORMAT.into(),
            latency_marker: DEFAULT_LATENCY_MARKER.into(),
        }
    }

    pub fn from_config(config: &AppConfig, process: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            extension: config.input.extension.clone(),
            time_format: config.parsing.time_format.clone(),
            latency_marker: config.parsing.latency_marker.clone(),
        }
    }

    /// Empty string matches every file.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Result files under `root`, sorted by path. Symlinks are kept and followed on read.
    /// Walk errors are returned as issues.
    pub fn discover(&self, root: &Path) -> (Vec<ResultFile>, Vec<Issue>) {
        let mut files = Vec::new();
        let mut issues = Vec::new();
        if !root.is_dir() {
            return (files, issues);
        }
        let walker = WalkDir::new(root)
            .min_depth(PATH_DEPTH)
            .max_depth(PATH_DEPTH)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    issues.push(Issue::io(path, &e));
                    continue;
                }
            };
            if entry.file_type().is_dir() || !self.matches_extension(entry.path()) {
                continue;
            }
            match ResultFile::from_path(root, entry.path()) {
                Some(file) => files.push(file),
                None => issues.push(Issue::io(entry.path(), "path is not valid UTF-8")),
            }
        }
        (files, issues)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        self.extension.is_empty()
            || path
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }

    /// Walks `root` and parses every result file. Never fails: a missing root yields an empty
    /// tree and per-file failures are recorded in `issues`.
    #[instrument(
        skip(self, root),
        fields(root = %root.as_ref().display(), process = %self.process)
    )]
    pub fn scan(&self, root: impl AsRef<Path>) -> Aggregation {
        let root = root.as_ref();
        let (files, mut issues) = self.discover(root);
        for issue in &issues {
            warn!(%issue, "skipping path");
        }

        let mut tree = ResultTree::new();
        let total = files.len();
        for (i, file) in files.iter().enumerate() {
            debug!(
                file = i + 1,
                total,
                filename = %file.filename,
                kind = file.kind.as_str(),
                "parsing"
            );
            issues.extend(self.ingest(&mut tree, file));
        }

        info!(
            files = total,
            entries = tree.len(),
            issues = issues.len(),
            "scan complete"
        );
        Aggregation {
            tree,
            issues,
            files_scanned: total,
        }
    }

    /// Parses one file into its tree entry and returns the issues it produced.
    pub fn ingest(&self, tree: &mut ResultTree, file: &ResultFile) -> Vec<Issue> {
        let entry = tree.ensure(&file.benchmark, &file.part, &file.device);

        // Stray non-UTF-8 bytes only damage the line they sit on.
        let bytes = match std::fs::read(&file.path) {
            Ok(b) => b,
            Err(e) => {
                let issue = Issue::io(&file.path, &e);
                warn!(%issue, "skipping file");
                return vec![issue];
            }
        };
        let text = String::from_utf8_lossy(&bytes);

        let ctx = ParseContext::new(&file.path, &self.process)
            .with_time_format(&self.time_format)
            .with_latency_marker(&self.latency_marker);
        let parsed = file.kind.parse(&text, &ctx);
        for issue in &parsed.issues {
            warn!(%issue, "malformed line");
        }

        match parsed.series {
            ParsedSeries::Network(series) => entry.nethogs = Some(series),
            ParsedSeries::Resource(series) => entry.top = Some(series),
            ParsedSeries::Latency(series) => entry.user_informed_time = Some(series),
        }
        parsed.issues
    }
}
