//! Date parsing, canonical formatting, and temporal classification.
//!
//! Every function that depends on "now" takes an explicit `today` reference
//! date instead of reading the system clock, so year inference and
//! classification stay deterministic under test.

use chrono::{Datelike, Duration, NaiveDate};

use crate::extract::date_rules;
use crate::models::{CalendarDate, TemporalBucket};

/// How far in the past a year-less date may fall before the intended year is
/// assumed to be next year. A highlighted deadline missing a year almost
/// always refers to something upcoming.
const PAST_WINDOW_DAYS: i64 = 60;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month number for an English month name, full or abbreviated. The first
/// three letters identify the month unambiguously.
pub(crate) fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let key = lower.get(..3)?;
    let month = match key {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Expands a two-digit year: values below 70 land in the 2000s, the rest in
/// the 1900s.
pub fn expand_two_digit_year(year: i32) -> i32 {
    if year < 70 {
        2000 + year
    } else {
        1900 + year
    }
}

/// Picks the year for a year-less month/day: today's year, unless that
/// candidate lands more than [`PAST_WINDOW_DAYS`] in the past, in which case
/// next year. Comparison is done on canonical strings so lenient dates like
/// `02/30` still order correctly.
pub fn infer_year(month: u32, day: u32, today: NaiveDate) -> i32 {
    let year = today.year();
    let cutoff = CalendarDate::from(today - Duration::days(PAST_WINDOW_DAYS)).to_canonical();
    let candidate = format!("{year:04}-{month:02}-{day:02}");
    if candidate < cutoff {
        year + 1
    } else {
        year
    }
}

/// Parses a date string in any supported input format.
///
/// The grammar is the extractor's pattern table, with the extra requirement
/// that the match cover the entire (trimmed) input: this is for a dedicated
/// date field, not free text. Year-less forms use the same inference rule as
/// extraction. Returns `None` for unparseable input or out-of-range fields;
/// never panics.
pub fn parse(input: &str, today: NaiveDate) -> Option<CalendarDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    for rule in date_rules() {
        let Some(caps) = rule.regex.captures(trimmed) else {
            continue;
        };
        let Some(matched) = caps.get(0) else {
            continue;
        };
        if matched.start() != 0 || matched.end() != trimmed.len() {
            continue;
        }
        if let Some(date) = (rule.parse)(&caps, today) {
            return Some(date);
        }
    }
    None
}

/// Parses the canonical `YYYY-MM-DD` storage form back into a date.
///
/// The year segment must be exactly four digits and month/day one or two,
/// so a hand-edited value like `10000-01-01` is rejected instead of being
/// compared lexicographically against well-formed canonical strings.
pub fn parse_canonical(input: &str) -> Option<CalendarDate> {
    let mut parts = input.trim().split('-');
    let year = digit_segment(parts.next()?, 4, 4)?;
    let month = digit_segment(parts.next()?, 1, 2)?;
    let day = digit_segment(parts.next()?, 1, 2)?;
    if parts.next().is_some() {
        return None;
    }
    CalendarDate::new(year, month as u32, day as u32)
}

fn digit_segment(part: &str, min_len: usize, max_len: usize) -> Option<i32> {
    if !(min_len..=max_len).contains(&part.len())
        || !part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    part.parse().ok()
}

/// Human-readable `"Mon D, YYYY"` form of a canonical date string. Echoes
/// the input unchanged when it does not parse, so callers can always render
/// something.
pub fn format_display(canonical: &str) -> String {
    match parse_canonical(canonical) {
        Some(date) => format!(
            "{} {}, {}",
            MONTH_ABBREVIATIONS[(date.month - 1) as usize],
            date.day,
            date.year
        ),
        None => canonical.to_string(),
    }
}

/// Classifies a canonical date string relative to `today`.
///
/// `Overdue` before today, `ThisWeek` through the end of the current week
/// (`today + (7 - weekday)` days, weekday 0 = Sunday), `Future` beyond that.
/// An unparseable date classifies as `Future`: a date the engine does not
/// understand is never flagged as urgent.
pub fn classify(canonical: &str, today: NaiveDate) -> TemporalBucket {
    let Some(date) = parse_canonical(canonical) else {
        return TemporalBucket::Future;
    };
    let date = date.to_canonical();
    if date < CalendarDate::from(today).to_canonical() {
        return TemporalBucket::Overdue;
    }
    let days_left = 7 - today.weekday().num_days_from_sunday() as i64;
    let end_of_week = CalendarDate::from(today + Duration::days(days_left)).to_canonical();
    if date <= end_of_week {
        TemporalBucket::ThisWeek
    } else {
        TemporalBucket::Future
    }
}
