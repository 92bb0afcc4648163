// top snapshot lines (18 fields); only the time, %CPU and %MEM columns are kept

use super::{ParseContext, Parsed, RecordFormat, parse_lines, parse_number, parse_time_of_day};
use crate::error::LineFault;
use crate::models::{ResourceSample, ResourceSeries};

const FIELDS: usize = 18;
const TIME: usize = 3;
const CPU: usize = 14;
const MEM: usize = 15;

pub struct TopFormat;

impl RecordFormat for TopFormat {
    type Record = ResourceSample;
    type Series = ResourceSeries;

    fn parse_line(line: &str, ctx: &ParseContext<'_>) -> Option<Result<ResourceSample, LineFault>> {
        if !line.contains(ctx.process) {
            return None;
        }
        Some(parse_fields(line, ctx.time_format))
    }

    fn build(records: &[ResourceSample]) -> ResourceSeries {
        ResourceSeries::from_samples(records)
    }
}

// day month date time tz year pid user pr ni virt res shr state %cpu %mem time+ command
fn parse_fields(line: &str, time_format: &str) -> Result<ResourceSample, LineFault> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS {
        return Err(LineFault::FieldCount {
            expected: FIELDS,
            found: fields.len(),
        });
    }
    Ok(ResourceSample {
        timestamp: parse_time_of_day(fields[TIME], time_format)?,
        cpu_percent: parse_number("cpu", fields[CPU])?,
        mem_percent: parse_number("mem", fields[MEM])?,
    })
}

/// Parse a whole top file for `ctx.process`.
pub fn parse(text: &str, ctx: &ParseContext<'_>) -> Parsed<ResourceSeries> {
    parse_lines::<TopFormat>(text, ctx)
}
