//! # Dueclip Core Library
//!
//! Free-text date/title extraction for a deadline tracker: given an
//! arbitrary highlighted text fragment, separate a human-readable task title
//! from an embedded calendar date expressed in any of a dozen overlapping
//! natural-language formats, and normalize that date to the canonical
//! `YYYY-MM-DD` storage form.
//!
//! ## Core Modules
//!
//! - [`extract`]: ordered pattern table turning free text into
//!   `{title, date}` pairs
//! - [`date`]: date parsing, canonical/display formatting, and
//!   overdue/this-week/future classification
//! - [`models`]: calendar date, temporal bucket, and tracked-item types
//! - [`store`]: keyed get/set storage contract with JSON-file and in-memory
//!   implementations
//! - [`error`]: error types for the storage boundary
//!
//! Both engine components are pure: no I/O, no global clock. "Today" is an
//! explicit parameter everywhere, so results are deterministic and the same
//! call can run concurrently from any number of call sites.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dueclip_core::{date, extract};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
//! let result = extract::extract("Essay due Feb 15, 2026", today);
//! assert_eq!(result.title, "Essay");
//! assert_eq!(result.date.as_deref(), Some("2026-02-15"));
//!
//! let display = date::format_display("2026-02-15");
//! assert_eq!(display, "Feb 15, 2026");
//! ```

pub mod date;
pub mod error;
pub mod extract;
pub mod models;
pub mod store;
