// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range filter for the request list.
//!
//! Validation is a pure function of the two raw inputs. A range that fails
//! validation must never reach the network.

use thiserror::Error;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Wire format of filter dates (`YYYY-MM-DD`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Identifies one end of the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// The inclusive lower bound.
    Start,
    /// The inclusive upper bound.
    End,
}

impl DateField {
    /// Returns the query parameter name for this bound.
    #[must_use]
    pub const fn query_key(&self) -> &'static str {
        match self {
            Self::Start => "start_date",
            Self::End => "end_date",
        }
    }
}

/// Reasons a date range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A bound is present but is not a calendar date.
    #[error("malformed date")]
    MalformedDate {
        /// The offending bound.
        field: DateField,
        /// The raw input.
        value: String,
    },
    /// Both bounds are present and the start is later than the end.
    #[error("start date after end date")]
    StartAfterEnd {
        /// The parsed start date.
        start: Date,
        /// The parsed end date.
        end: Date,
    },
}

/// A validated, possibly open-ended date range.
///
/// Only-start means "from start onward"; only-end means "up to end".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<Date>,
    end: Option<Date>,
}

impl DateRange {
    /// Returns a range with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Returns the lower bound, if any.
    #[must_use]
    pub const fn start(&self) -> Option<Date> {
        self.start
    }

    /// Returns the upper bound, if any.
    #[must_use]
    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    /// Returns whether neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns the query parameters for the bounds that are present.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [(DateField::Start, self.start), (DateField::End, self.end)]
            .into_iter()
            .filter_map(|(field, date)| date.map(|d| (field.query_key(), format_date(d))))
            .collect()
    }
}

/// Formats a bound with the same description it was parsed with.
fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Normalizes an input: blank means absent.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_bound(field: DateField, raw: Option<&str>) -> Result<Option<Date>, FilterError> {
    present(raw)
        .map(|value| {
            Date::parse(value, DATE_FORMAT).map_err(|_| FilterError::MalformedDate {
                field,
                value: value.to_string(),
            })
        })
        .transpose()
}

/// Validates a start/end pair before a filtered query is issued.
///
/// Absent and blank inputs are treated the same. Both bounds are inclusive,
/// so `start == end` is a valid single-day range.
///
/// # Arguments
///
/// * `start` - The raw start input
/// * `end` - The raw end input
///
/// # Errors
///
/// Returns:
/// - `FilterError::MalformedDate` if a present bound is not `YYYY-MM-DD`
/// - `FilterError::StartAfterEnd` if both bounds parse and `start > end`
pub fn validate_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<DateRange, FilterError> {
    let start_date: Option<Date> = parse_bound(DateField::Start, start)?;
    let end_date: Option<Date> = parse_bound(DateField::End, end)?;

    match (start_date, end_date) {
        (Some(s), Some(e)) if s > e => Err(FilterError::StartAfterEnd { start: s, end: e }),
        _ => Ok(DateRange {
            start: start_date,
            end: end_date,
        }),
    }
}
