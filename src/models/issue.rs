// Diagnostics collected while parsing: one entry per reported line or file failure

use std::fmt;
use std::path::PathBuf;

use crate::error::LineFault;

#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The file could not be read; it contributes no records.
    Io(String),
    /// A qualifying line did not match its record format.
    Format(LineFault),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub source: PathBuf,
    /// 1-based; `None` for file-level failures.
    pub line_number: Option<usize>,
    pub line: Option<String>,
    pub kind: IssueKind,
}

impl Issue {
    pub fn io(source: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        Self {
            source: source.into(),
            line_number: None,
            line: None,
            kind: IssueKind::Io(err.to_string()),
        }
    }

    pub fn format(
        source: impl Into<PathBuf>,
        line_number: usize,
        line: &str,
        fault: LineFault,
    ) -> Self {
        Self {
            source: source.into(),
            line_number: Some(line_number),
            line: Some(line.trim_end().to_string()),
            kind: IssueKind::Format(fault),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self.kind, IssueKind::Io(_))
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.line_number, &self.line) {
            (IssueKind::Io(msg), _, _) => {
                write!(f, "{}: cannot read file: {}", self.source.display(), msg)
            }
            (IssueKind::Format(fault), Some(n), Some(line)) => {
                write!(f, "{}:{}: {} for line: {}", self.source.display(), n, fault, line)
            }
            (IssueKind::Format(fault), _, _) => write!(f, "{}: {}", self.source.display(), fault),
        }
    }
}
