use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ReportError, Result};

pub const DEGREE_SYMBOL: &str = "\u{b0}C";

/// Renders a temperature as `"<value>°C"`.
///
/// Integral values keep one decimal (`10.0°C`), everything else uses the
/// shortest representation that round-trips.
pub fn format_temperature(value: f64) -> String {
    format!("{}{DEGREE_SYMBOL}", display_number(value))
}

/// Parses a raw field as a temperature, failing with `InvalidType` for
/// anything that is not a number.
pub fn parse_temperature(field: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| ReportError::InvalidType {
            value: field.to_string(),
        })
}

pub fn format_temperature_field(field: &str) -> Result<String> {
    parse_temperature(field).map(format_temperature)
}

/// Parses an ISO-8601 date or date-time.
///
/// The date is `YYYY-MM-DD` or `YYYYMMDD`. A time may follow after any single
/// separator character, as `HH`, `HH:MM`, `HHMM`, `HH:MM:SS` or `HHMMSS`, with
/// an optional fraction of seconds and an optional `Z` / `±HH[:MM]` offset.
/// Offsets are validated but dropped; the wall-clock date is what gets
/// reported.
pub fn parse_iso_date(iso: &str) -> Result<NaiveDateTime> {
    parse_datetime(iso.trim()).ok_or_else(|| ReportError::InvalidDateFormat {
        value: iso.to_string(),
    })
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let (date, rest) = if s.as_bytes().get(4) == Some(&b'-') {
        let date = NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()?;
        (date, s.get(10..)?)
    } else {
        let digits = s.get(..8)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        (NaiveDate::parse_from_str(digits, "%Y%m%d").ok()?, s.get(8..)?)
    };

    let mut chars = rest.chars();
    let time = match chars.next() {
        None => NaiveTime::MIN,
        Some(_separator) => parse_time_with_offset(chars.as_str())?,
    };

    Some(date.and_time(time))
}

fn parse_time_with_offset(s: &str) -> Option<NaiveTime> {
    let (clock, offset) = match s.find(['+', '-', 'Z']) {
        Some(at) => s.split_at(at),
        None => (s, ""),
    };

    match offset.as_bytes().first() {
        None => {}
        Some(b'Z') if offset.len() == 1 => {}
        Some(b'+') | Some(b'-') => {
            parse_clock(&offset[1..])?;
        }
        _ => return None,
    }

    parse_clock(clock)
}

/// `HH[:MM[:SS[.f]]]` or the colon-free `HH[MM[SS[.f]]]`.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (hms, fraction) = match s.find(['.', ',']) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };

    let parts: Vec<&str> = if hms.contains(':') {
        hms.split(':').collect()
    } else {
        if hms.len() % 2 != 0 || !hms.is_ascii() {
            return None;
        }
        (0..hms.len()).step_by(2).filter_map(|i| hms.get(i..i + 2)).collect()
    };
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *field = part.parse().ok()?;
    }

    let nanos = match fraction {
        None => 0,
        // A fraction only makes sense after seconds.
        Some(digits) if parts.len() == 3 && (1..=9).contains(&digits.len()) => {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            format!("{digits:0<9}").parse().ok()?
        }
        Some(_) => return None,
    };

    NaiveTime::from_hms_nano_opt(fields[0], fields[1], fields[2], nanos)
}

/// Converts an ISO date into e.g. `Tuesday 06 July 2021`.
pub fn convert_date(iso: &str) -> Result<String> {
    Ok(parse_iso_date(iso)?.format("%A %d %B %Y").to_string())
}

/// Formats a number the way a reader expects to see a reading: `10.0`, not
/// `10`. Magnitudes below `1e-4` or from `1e16` up switch to exponent form
/// (`1e+16`, `1.5e-05`).
fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let exp = format!("{value:e}");
        let (mantissa, exponent) = exp.split_once('e').unwrap_or((exp.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or_default();
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
