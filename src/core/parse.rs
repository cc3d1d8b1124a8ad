// src/core/parse.rs
//! Scalar parsers: numbers, timestamps and regex captures out of free text.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use regex::Regex;

use crate::error::{ExtractError, Result};

/// Date format used by message headers, e.g. `17.03.2024 21:05:33`.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Lenient integer: drops thousands separators (`.`, `,`, `'`, any whitespace)
/// and parses what is left. Anything still unparsable is 0.
///
/// Callers that must tell "absent" from "zero" check presence first.
pub fn parse_int(s: &str) -> i64 {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '\'') && !c.is_whitespace())
        .collect();
    cleaned.parse().unwrap_or(0)
}

/// Strict integer: the trimmed text must be a clean integer.
pub fn parse_int_strict(s: &str) -> Result<i64> {
    let t = s.trim();
    t.parse()
        .map_err(|_| ExtractError::mismatch(format!("not an integer: {t:?}")))
}

/// Parse `DD.MM.YYYY HH:MM:SS` as wall-clock time in `zone` and hand it back in
/// the process-local zone. On a DST fold the earlier instant wins.
pub fn parse_timestamp<Tz: TimeZone>(s: &str, zone: &Tz) -> Result<DateTime<Local>> {
    let t = s.trim();
    let naive = NaiveDateTime::parse_from_str(t, TIMESTAMP_FORMAT)
        .map_err(|e| ExtractError::mismatch(format!("bad timestamp {t:?}: {e}")))?;
    let at = zone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ExtractError::mismatch(format!("timestamp {t:?} does not exist in source zone")))?;
    Ok(at.with_timezone(&Local))
}

/// Capture groups 1.. of the first match, or `None` if the pattern does not match.
/// Groups that did not participate come back as "".
pub fn captures<'s>(re: &Regex, subject: &'s str) -> Option<Vec<&'s str>> {
    let caps = re.captures(subject)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|m| m.map_or("", |m| m.as_str()))
            .collect(),
    )
}

/// First capture group as an unsigned id, if the pattern matches.
pub fn capture_id(re: &Regex, subject: &str) -> Option<u32> {
    re.captures(subject)?.get(1)?.as_str().parse().ok()
}
