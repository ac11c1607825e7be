use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta,
    TimeZone, Utc,
};

/// Date-time layouts without a zone. Read as local time, or as UTC when followed by `Z`.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Layouts with a numeric offset that RFC 3339 parsing does not cover.
const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Parses an ISO-8601 string into an absolute instant.
///
/// A string with an offset (or `Z`) is taken as-is, a bare date-time is read in the
/// local timezone and a bare date is midnight UTC.
pub fn parse_instant(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Some(utc) = date.strip_suffix(['Z', 'z']) {
        return parse_naive(utc).map(|naive| naive.and_utc());
    }
    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(instant) = DateTime::<FixedOffset>::parse_from_str(date, format) {
            return Some(instant.with_timezone(&Utc));
        }
    }
    if let Some(naive) = parse_naive(date) {
        return local_to_utc(&Local, &naive);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

fn parse_naive(date: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
}

/// Resolves a wall-clock time in `zone`.
///
/// Ambiguous times take the earlier instant. Times skipped by a forward transition use
/// the offset in effect before it, so `02:30` in a `02:00 -> 03:00` gap lands on `03:30`.
fn local_to_utc<Tz: TimeZone>(zone: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => {
            Some(local.with_timezone(&Utc))
        }
        LocalResult::None => {
            let before = naive.checked_sub_signed(TimeDelta::days(1))?;
            let offset = zone.offset_from_utc_datetime(&before).fix();
            naive
                .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
                .map(|utc| utc.and_utc())
        }
    }
}

/// Shifts an instant by the local UTC offset and drops the zone.
///
/// Returns `None` for strings that are not dates. Callers treat `None` as never
/// satisfying a comparison.
pub fn normalize(date: &str) -> Option<NaiveDateTime> {
    parse_instant(date).map(|instant| instant.with_timezone(&Local).naive_local())
}

/// `normalize(left) >= normalize(right)`, false if either side is not a date.
pub fn not_before(left: &str, right: &str) -> bool {
    matches!((normalize(left), normalize(right)), (Some(l), Some(r)) if l >= r)
}
