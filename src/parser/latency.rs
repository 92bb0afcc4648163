// Refresh-time logs: marker lines of the form `<ignored>,<component>,<signed magnitude>`.
// The component is checked before the magnitude, so an unknown component is reported
// even when its magnitude would not parse.

use super::{ParseContext, Parsed, RecordFormat, parse_lines};
use crate::error::LineFault;
use crate::models::{Component, LatencyEvent, LatencySeries};

pub struct LatencyFormat;

impl RecordFormat for LatencyFormat {
    type Record = LatencyEvent;
    type Series = LatencySeries;

    fn parse_line(line: &str, ctx: &ParseContext<'_>) -> Option<Result<LatencyEvent, LineFault>> {
        if !line.contains(ctx.latency_marker) {
            return None;
        }
        // Marker lines that are not three comma fields are ordinary log output.
        let fields: Vec<&str> = line.split(',').collect();
        let [_, name, magnitude] = fields.as_slice() else {
            return None;
        };
        let Some(component) = Component::from_tag(name) else {
            return Some(Err(LineFault::UnknownComponent(name.trim().to_string())));
        };
        let magnitude = magnitude.trim().parse::<i64>().ok()?;
        Some(Ok(LatencyEvent {
            component,
            magnitude: magnitude.unsigned_abs(),
        }))
    }

    fn build(records: &[LatencyEvent]) -> LatencySeries {
        LatencySeries::from_events(records)
    }
}

/// Parse a whole refresh-time file. `ctx.process` is not used.
pub fn parse(text: &str, ctx: &ParseContext<'_>) -> Parsed<LatencySeries> {
    parse_lines::<LatencyFormat>(text, ctx)
}
