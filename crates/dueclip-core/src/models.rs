use chrono::{DateTime, NaiveDate, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A plain calendar date with no timezone attached.
///
/// Field bounds are checked on construction: month 1–12, day 1–31. The day
/// bound is deliberately independent of month length and leap years, so
/// `02/30` constructs successfully. Stored records have always used this
/// lenient bound; tightening it would invalidate existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Builds a date, rejecting out-of-range fields. Never clamps.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// The canonical `YYYY-MM-DD` storage form. Zero-padded and fixed-width,
    /// so lexicographic comparison of canonical strings matches date order.
    pub fn to_canonical(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

/// Result of splitting a free-text fragment into a title and an optional
/// detected due date (canonical form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub title: String,
    pub date: Option<String>,
}

/// Classification of a stored date relative to a reference "today".
/// Derived on every render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalBucket {
    Overdue,
    ThisWeek,
    Future,
}

impl fmt::Display for TemporalBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalBucket::Overdue => write!(f, "overdue"),
            TemporalBucket::ThisWeek => write!(f, "thisweek"),
            TemporalBucket::Future => write!(f, "future"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid temporal bucket: {0}")]
pub struct ParseTemporalBucketError(String);

impl FromStr for TemporalBucket {
    type Err = ParseTemporalBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overdue" => Ok(TemporalBucket::Overdue),
            "thisweek" => Ok(TemporalBucket::ThisWeek),
            "future" => Ok(TemporalBucket::Future),
            _ => Err(ParseTemporalBucketError(s.to_string())),
        }
    }
}

/// Which list an item belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Assignments,
    Exams,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Assignments => write!(f, "assignments"),
            ItemKind::Exams => write!(f, "exams"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid item kind: {0}")]
pub struct ParseItemKindError(String);

impl FromStr for ItemKind {
    type Err = ParseItemKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assignments" | "assignment" => Ok(ItemKind::Assignments),
            "exams" | "exam" => Ok(ItemKind::Exams),
            _ => Err(ParseItemKindError(s.to_string())),
        }
    }
}

/// A tracked item. `date` holds the canonical `YYYY-MM-DD` form, the only
/// date representation that is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub completed: bool,
    pub created: DateTime<Utc>,
}

impl Item {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date: date.into(),
            completed: false,
            created: Utc::now(),
        }
    }
}

/// The stored record: one list per item kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerData {
    #[serde(default)]
    pub assignments: Vec<Item>,
    #[serde(default)]
    pub exams: Vec<Item>,
}

impl TrackerData {
    pub fn items(&self, kind: ItemKind) -> &Vec<Item> {
        match kind {
            ItemKind::Assignments => &self.assignments,
            ItemKind::Exams => &self.exams,
        }
    }

    pub fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Assignments => &mut self.assignments,
            ItemKind::Exams => &mut self.exams,
        }
    }

    /// Items of one kind in listing order: incomplete before completed,
    /// then by canonical date ascending.
    pub fn sorted_items(&self, kind: ItemKind) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items(kind).iter().collect();
        items.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| a.date.cmp(&b.date))
        });
        items
    }

    /// All items of one kind whose id starts with `prefix`. The prefix is
    /// matched against the full hyphenated uuid form.
    pub fn find_by_id_prefix(&self, kind: ItemKind, prefix: &str) -> Vec<&Item> {
        self.items(kind)
            .iter()
            .filter(|item| item.id.to_string().starts_with(prefix))
            .collect()
    }
}
