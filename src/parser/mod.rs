// Log parsers: one record format per benchmark output file type.
// Each format turns qualifying lines into records; the shared loop collects faults as issues.

pub mod latency;
pub mod nethogs;
pub mod timeline;
pub mod top;

use std::path::Path;

use chrono::{NaiveTime, Timelike};

use crate::error::LineFault;
use crate::models::{Issue, LatencySeries, NetworkSeries, ResourceSeries};

pub use latency::LatencyFormat;
pub use nethogs::NethogsFormat;
pub use top::TopFormat;

/// Time-of-day layout of the nethogs/top timestamp column.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Lines in a refresh-time log are candidates only when they contain this marker.
/// An empty marker accepts every line.
pub const DEFAULT_LATENCY_MARKER: &str = "$";

/// Per-file settings shared by all formats.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub source: &'a Path,
    /// Lines must contain this substring to qualify (nethogs and top only).
    pub process: &'a str,
    pub time_format: &'a str,
    pub latency_marker: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a Path, process: &'a str) -> Self {
        Self {
            source,
            process,
            time_format: DEFAULT_TIME_FORMAT,
            latency_marker: DEFAULT_LATENCY_MARKER,
        }
    }

    pub fn with_time_format(mut self, time_format: &'a str) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_latency_marker(mut self, marker: &'a str) -> Self {
        self.latency_marker = marker;
        self
    }
}

/// A record format: how one line becomes a record and how records become a series.
pub trait RecordFormat {
    type Record;
    type Series;

    /// `None` skips the line silently (not a candidate, or expected noise).
    /// `Some(Err(_))` is a format violation that gets reported.
    fn parse_line(line: &str, ctx: &ParseContext<'_>) -> Option<Result<Self::Record, LineFault>>;

    /// Fold records into the series, deriving its timeline.
    fn build(records: &[Self::Record]) -> Self::Series;
}

/// Output of parsing one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub series: T,
    pub issues: Vec<Issue>,
}

impl<T> Parsed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            series: f(self.series),
            issues: self.issues,
        }
    }
}

/// Runs `F` over every line. A bad line is recorded and skipped; it never drops other lines.
pub fn parse_lines<F: RecordFormat>(text: &str, ctx: &ParseContext<'_>) -> Parsed<F::Series> {
    let mut records = Vec::new();
    let mut issues = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        match F::parse_line(line, ctx) {
            None => {}
            Some(Ok(record)) => records.push(record),
            Some(Err(fault)) => {
                issues.push(Issue::format(ctx.source, idx + 1, line, fault));
            }
        }
    }
    Parsed {
        series: F::build(&records),
        issues,
    }
}

/// File type, decided from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Nethogs,
    Top,
    UserInformedTime,
}

impl RecordKind {
    /// "nethogs" wins over "top"; anything else is a refresh-time log.
    pub fn classify(filename: &str) -> Self {
        if filename.contains("nethogs") {
            Self::Nethogs
        } else if filename.contains("top") {
            Self::Top
        } else {
            Self::UserInformedTime
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nethogs => "nethogs",
            Self::Top => "top",
            Self::UserInformedTime => "user_informed_time",
        }
    }

    pub fn parse(self, text: &str, ctx: &ParseContext<'_>) -> Parsed<ParsedSeries> {
        match self {
            Self::Nethogs => {
                parse_lines::<NethogsFormat>(text, ctx).map(ParsedSeries::Network)
            }
            Self::Top => parse_lines::<TopFormat>(text, ctx).map(ParsedSeries::Resource),
            Self::UserInformedTime => {
                parse_lines::<LatencyFormat>(text, ctx).map(ParsedSeries::Latency)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSeries {
    Network(NetworkSeries),
    Resource(ResourceSeries),
    Latency(LatencySeries),
}

/// Seconds since midnight for a time-of-day field.
pub(crate) fn parse_time_of_day(value: &str, format: &str) -> Result<f64, LineFault> {
    let time = NaiveTime::parse_from_str(value, format).map_err(|e| LineFault::InvalidTime {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9)
}

pub(crate) fn parse_number(field: &'static str, value: &str) -> Result<f64, LineFault> {
    value.parse::<f64>().map_err(|_| LineFault::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
