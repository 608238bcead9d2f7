//! Line codec for the rides file.
//!
//! One ride per line, five positional fields separated by `,`:
//!
//! ```text
//! timestamp,distance_km,duration_hours,comment,url
//! 23-08-2012 13:21:48,75,4.00,"Commute to work, with visit at grocery",http://www.mymap.com/1234
//! ```
//!
//! A field is wrapped in double quotes when it contains the delimiter, a
//! quote or a line break; an embedded quote is doubled (`"` → `""`).

use crate::errors::{AppError, AppResult};
use crate::models::Ride;
use chrono::NaiveDateTime;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

pub const DELIMITER: u8 = b',';
pub const FIELD_COUNT: usize = 5;

/// Timestamp layout written by this version.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Timestamp layout of files written by older versions (see `bike migrate`).
pub const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize a ride into a single line, without the trailing newline.
pub fn encode(ride: &Ride) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record([
        ride.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ride.distance_km.to_string(),
        ride.duration_hours.to_string(),
        ride.comment.clone(),
        ride.url.clone(),
    ])?;

    let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
    let line = String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))?;

    Ok(line.strip_suffix('\n').unwrap_or(&line).to_string())
}

/// Parse one line of the rides file. `line_no` is 1-based and only used
/// for error reporting.
pub fn decode(line: &str, line_no: usize) -> AppResult<Ride> {
    decode_with(line, line_no, &[TIMESTAMP_FORMAT]).map(|(ride, _)| ride)
}

/// Parse one line accepting any of `formats` for the timestamp column.
/// Returns the ride together with the format that matched.
pub(crate) fn decode_with(
    line: &str,
    line_no: usize,
    formats: &[&'static str],
) -> AppResult<(Ride, &'static str)> {
    let record =
        tokenize(line).map_err(|e| AppError::malformed(line_no, e.to_string(), line))?;

    if record.len() != FIELD_COUNT {
        return Err(AppError::malformed(
            line_no,
            format!("expected {FIELD_COUNT} fields, found {}", record.len()),
            line,
        ));
    }

    let raw_ts = record[0].trim();
    let (timestamp, format) = formats
        .iter()
        .find_map(|f| {
            NaiveDateTime::parse_from_str(raw_ts, f)
                .ok()
                .map(|ts| (ts, *f))
        })
        .ok_or_else(|| {
            AppError::malformed(
                line_no,
                format!("invalid timestamp '{raw_ts}' (expected DD-MM-YYYY HH:MM:SS)"),
                line,
            )
        })?;

    let distance = parse_number(&record[1], "distance", line_no, line)?;
    let duration = parse_number(&record[2], "duration", line_no, line)?;

    // hand-edited values such as a zero duration are kept; the aggregator
    // reports the speed as unavailable
    let ride = Ride {
        timestamp,
        distance_km: distance,
        duration_hours: duration,
        comment: record[3].to_string(),
        url: record[4].to_string(),
    };
    ride.check_single_line().map_err(|e| match e {
        AppError::InvalidInput(reason) => AppError::malformed(line_no, reason, line),
        other => other,
    })?;

    Ok((ride, format))
}

fn tokenize(line: &str) -> Result<StringRecord, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .double_quote(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    rdr.read_record(&mut record)?;
    Ok(record)
}

fn parse_number(raw: &str, field: &str, line_no: usize, line: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::malformed(line_no, format!("invalid {field} '{raw}'"), line))
}
