// nethogs trace lines: `<day> <month> <date> <HH:MM:SS> <tz> <year> <process> <sent> <received>`

use super::{ParseContext, Parsed, RecordFormat, parse_lines, parse_number, parse_time_of_day};
use crate::error::LineFault;
use crate::models::{NetworkSample, NetworkSeries};

const FIELDS: usize = 9;

pub struct NethogsFormat;

impl RecordFormat for NethogsFormat {
    type Record = NetworkSample;
    type Series = NetworkSeries;

    fn parse_line(line: &str, ctx: &ParseContext<'_>) -> Option<Result<NetworkSample, LineFault>> {
        if !line.contains(ctx.process) {
            return None;
        }
        Some(parse_fields(line, ctx.time_format))
    }

    fn build(records: &[NetworkSample]) -> NetworkSeries {
        NetworkSeries::from_samples(records)
    }
}

fn parse_fields(line: &str, time_format: &str) -> Result<NetworkSample, LineFault> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [_day, _month, _date, time, _tz, _year, _process, sent, received] = fields.as_slice()
    else {
        return Err(LineFault::FieldCount {
            expected: FIELDS,
            found: fields.len(),
        });
    };
    Ok(NetworkSample {
        timestamp: parse_time_of_day(time, time_format)?,
        sent: parse_number("sent", sent)?,
        received: parse_number("received", received)?,
    })
}

/// Parse a whole nethogs file for `ctx.process`.
pub fn parse(text: &str, ctx: &ParseContext<'_>) -> Parsed<NetworkSeries> {
    parse_lines::<NethogsFormat>(text, ctx)
}
