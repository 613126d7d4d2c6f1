//! Free-text extraction: split an arbitrary highlighted fragment into a task
//! title and an embedded due date.
//!
//! Recognition runs over an ordered table of (regex, parse) rules, most
//! specific first. The first rule whose pattern matches anywhere in the text
//! *and* whose parse step yields an in-bounds [`CalendarDate`] wins; a match
//! with out-of-range fields is discarded and evaluation continues with the
//! next rule. When several date-like substrings are present, rule order (not
//! substring position) decides which one is honored.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::date::{expand_two_digit_year, infer_year, month_number};
use crate::models::{CalendarDate, ExtractionResult};

/// English month names, full or abbreviated.
const MONTH_PATTERN: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Optional ordinal suffix on a day number (1st, 2nd, 3rd, 15th).
const ORDINAL_PATTERN: &str = "(?:st|nd|rd|th)";

/// One entry of the pattern table: a recognizer plus the parse step that
/// turns its captures into a bounded calendar date.
pub(crate) struct DateRule {
    pub(crate) regex: Regex,
    pub(crate) parse: fn(&Captures, NaiveDate) -> Option<CalendarDate>,
}

static DATE_RULES: LazyLock<Vec<DateRule>> = LazyLock::new(|| {
    let month_day_year = format!(
        r"(?i)\b({MONTH_PATTERN})\s+(\d{{1,2}}){ORDINAL_PATTERN}?,?\s+(\d{{4}})\b"
    );
    let day_month_year = format!(
        r"(?i)\b(\d{{1,2}}){ORDINAL_PATTERN}?\s+({MONTH_PATTERN}),?\s+(\d{{4}})\b"
    );
    let month_day_two_digit = format!(
        r"(?i)\b({MONTH_PATTERN})\s+(\d{{1,2}}){ORDINAL_PATTERN}?,?\s+(\d{{2}})\b"
    );
    let month_day = format!(r"(?i)\b({MONTH_PATTERN})\s+(\d{{1,2}}){ORDINAL_PATTERN}?\b");
    let day_month = format!(r"(?i)\b(\d{{1,2}}){ORDINAL_PATTERN}?\s+({MONTH_PATTERN})\b");

    // Ordered from most specific to least specific. Order is load-bearing:
    // every year-less rule sits below the yeared rule that would also match
    // its substring.
    vec![
        // YYYY-MM-DD
        rule(r"(\d{4})-(\d{1,2})-(\d{1,2})", parse_iso),
        // MM/DD/YYYY, MM-DD-YYYY, MM.DD.YYYY
        rule(r"(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})", parse_numeric_four_digit),
        // MM/DD/YY and friends
        rule(r"(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2})\b", parse_numeric_two_digit),
        // Feb 15, 2026 / February 15th 2026
        rule(&month_day_year, parse_month_day_year),
        // 15 Feb 2026 / 15th February 2026
        rule(&day_month_year, parse_day_month_year),
        // Feb 15, 26
        rule(&month_day_two_digit, parse_month_day_two_digit),
        // Feb 15 / February 15th (year inferred)
        rule(&month_day, parse_month_day),
        // 15 Feb / 15th February (year inferred)
        rule(&day_month, parse_day_month),
        // MM/DD, MM-DD, MM.DD (year inferred; first group must be a month)
        rule(r"\b(\d{1,2})[/.\-](\d{1,2})\b", parse_numeric_no_year),
    ]
});

fn rule(pattern: &str, parse: fn(&Captures, NaiveDate) -> Option<CalendarDate>) -> DateRule {
    DateRule {
        regex: Regex::new(pattern).unwrap(),
        parse,
    }
}

pub(crate) fn date_rules() -> &'static [DateRule] {
    &DATE_RULES
}

static RE_LEADING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s,\-–—:|]+").unwrap());

static RE_TRAILING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,\-–—:|]+$").unwrap());

static RE_CONNECTIVES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(due|deadline|submit|by|on|date|@)\b\s*").unwrap());

// ── Per-rule parse steps ────────────────────────────────────────────────

fn capture_u32(caps: &Captures, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn capture_i32(caps: &Captures, idx: usize) -> Option<i32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn parse_iso(caps: &Captures, _today: NaiveDate) -> Option<CalendarDate> {
    CalendarDate::new(capture_i32(caps, 1)?, capture_u32(caps, 2)?, capture_u32(caps, 3)?)
}

fn parse_numeric_four_digit(caps: &Captures, _today: NaiveDate) -> Option<CalendarDate> {
    CalendarDate::new(capture_i32(caps, 3)?, capture_u32(caps, 1)?, capture_u32(caps, 2)?)
}

fn parse_numeric_two_digit(caps: &Captures, _today: NaiveDate) -> Option<CalendarDate> {
    let year = expand_two_digit_year(capture_i32(caps, 3)?);
    CalendarDate::new(year, capture_u32(caps, 1)?, capture_u32(caps, 2)?)
}

fn parse_month_day_year(caps: &Captures, _today: NaiveDate) -> Option<CalendarDate> {
    let month = month_number(caps.get(1)?.as_str())?;
    CalendarDate::new(capture_i32(caps, 3)?, month, capture_u32(caps, 2)?)
}

fn parse_day_month_year(caps: &Captures, _today: NaiveDate) -> Option<CalendarDate> {
    let month = month_number(caps.get(2)?.as_str())?;
    CalendarDate::new(capture_i32(caps, 3)?, month, capture_u32(caps, 1)?)
}

fn parse_month_day_two_digit(caps: &Captures, _today: NaiveDate) -> Option<CalendarDate> {
    let month = month_number(caps.get(1)?.as_str())?;
    let year = expand_two_digit_year(capture_i32(caps, 3)?);
    CalendarDate::new(year, month, capture_u32(caps, 2)?)
}

fn parse_month_day(caps: &Captures, today: NaiveDate) -> Option<CalendarDate> {
    let month = month_number(caps.get(1)?.as_str())?;
    let day = capture_u32(caps, 2)?;
    CalendarDate::new(infer_year(month, day, today), month, day)
}

fn parse_day_month(caps: &Captures, today: NaiveDate) -> Option<CalendarDate> {
    let month = month_number(caps.get(2)?.as_str())?;
    let day = capture_u32(caps, 1)?;
    CalendarDate::new(infer_year(month, day, today), month, day)
}

fn parse_numeric_no_year(caps: &Captures, today: NaiveDate) -> Option<CalendarDate> {
    let month = capture_u32(caps, 1)?;
    if month > 12 {
        // Ambiguous as day/month without a year; rejected.
        return None;
    }
    let day = capture_u32(caps, 2)?;
    CalendarDate::new(infer_year(month, day, today), month, day)
}

// ── Extraction ──────────────────────────────────────────────────────────

/// Splits `text` into a title and an optional detected date.
///
/// `today` drives year inference for year-less matches. The returned title
/// is the input with the matched date substring, surrounding separator
/// punctuation, and connective words (`due`, `deadline`, ...) removed; if
/// that cleanup leaves nothing, the original trimmed text is returned so a
/// non-empty input never yields an empty title. Never panics.
pub fn extract(text: &str, today: NaiveDate) -> ExtractionResult {
    let cleaned = text.trim();

    for rule in DATE_RULES.iter() {
        let Some(caps) = rule.regex.captures(cleaned) else {
            continue;
        };
        let Some(date) = (rule.parse)(&caps, today) else {
            continue;
        };
        let Some(matched) = caps.get(0) else {
            continue;
        };

        let remainder = format!(
            "{}{}",
            &cleaned[..matched.start()],
            &cleaned[matched.end()..]
        );
        let trimmed = RE_LEADING_SEPARATORS.replace(&remainder, "");
        let trimmed = RE_TRAILING_SEPARATORS.replace(&trimmed, "");
        let title = RE_CONNECTIVES.replace_all(&trimmed, "").trim().to_string();

        return ExtractionResult {
            title: if title.is_empty() {
                cleaned.to_string()
            } else {
                title
            },
            date: Some(date.to_canonical()),
        };
    }

    ExtractionResult {
        title: cleaned.to_string(),
        date: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    #[test]
    fn strips_connective_word_and_punctuation() {
        let result = extract("Essay due Feb 15, 2026", today());
        assert_eq!(result.title, "Essay");
        assert_eq!(result.date.as_deref(), Some("2026-02-15"));
    }

    #[test]
    fn day_first_with_ordinal() {
        let result = extract("15th February 2026 Midterm", today());
        assert_eq!(result.title, "Midterm");
        assert_eq!(result.date.as_deref(), Some("2026-02-15"));
    }

    #[test]
    fn numeric_rule_wins_over_yearless_month_fallback() {
        let result = extract("Project due 2/15/2026 Feb 2026", today());
        assert_eq!(result.date.as_deref(), Some("2026-02-15"));
    }

    #[test]
    fn bare_number_is_not_a_date() {
        let result = extract("Homework 5", today());
        assert_eq!(result.title, "Homework 5");
        assert_eq!(result.date, None);
    }

    #[test]
    fn iso_date_anywhere_in_text() {
        // "submit" is a connective word and is stripped from the title too.
        let result = extract("Submit report 2026-03-01", today());
        assert_eq!(result.title, "report");
        assert_eq!(result.date.as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn title_falls_back_to_input_when_cleanup_empties_it() {
        let result = extract("Feb 15, 2026", today());
        assert_eq!(result.title, "Feb 15, 2026");
        assert_eq!(result.date.as_deref(), Some("2026-02-15"));
    }

    #[test]
    fn bare_numeric_with_day_first_is_rejected() {
        // 13 cannot be a month, and without a year the order is ambiguous.
        let result = extract("Report 13/05", today());
        assert_eq!(result.title, "Report 13/05");
        assert_eq!(result.date, None);
    }

    #[test]
    fn out_of_range_match_falls_through_to_next_rule() {
        // 13/45/2026 matches the numeric four-digit-year rule but fails the
        // field bounds; evaluation continues instead of aborting.
        let result = extract("due 13/45/2026", today());
        assert_eq!(result.date, None);
        assert_eq!(result.title, "due 13/45/2026");
    }

    #[test]
    fn separator_punctuation_around_date_is_stripped() {
        let result = extract("Lab report — 03/04/2026", today());
        assert_eq!(result.title, "Lab report");
        assert_eq!(result.date.as_deref(), Some("2026-03-04"));
    }

    #[test]
    fn two_digit_year_numeric() {
        let result = extract("Quiz 03/04/68", today());
        assert_eq!(result.title, "Quiz");
        assert_eq!(result.date.as_deref(), Some("2068-03-04"));
    }

    #[test]
    fn yearless_month_day_infers_upcoming_year() {
        // Today is 2026-01-10; Feb 15 is ahead, so the current year is kept.
        let result = extract("Essay due Feb 15", today());
        assert_eq!(result.title, "Essay");
        assert_eq!(result.date.as_deref(), Some("2026-02-15"));
    }

    #[test]
    fn yearless_date_far_in_past_rolls_to_next_year() {
        // Nov 1 is more than 60 days before 2026-06-01.
        let june = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let result = extract("Thesis draft Nov 1", june);
        assert_eq!(result.date.as_deref(), Some("2026-11-01"));
        let result = extract("Thesis draft Feb 15", june);
        assert_eq!(result.date.as_deref(), Some("2027-02-15"));
    }

    #[test]
    fn whitespace_only_input() {
        let result = extract("   ", today());
        assert_eq!(result.title, "");
        assert_eq!(result.date, None);
    }

    #[test]
    fn bare_numeric_month_day() {
        let result = extract("Problem set 4/20", today());
        assert_eq!(result.title, "Problem set");
        assert_eq!(result.date.as_deref(), Some("2026-04-20"));
    }
}
