// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DateField, DateRange, FilterError, validate_date_range};
use time::macros::date;

#[test]
fn test_both_absent_is_unbounded() {
    let range: DateRange = validate_date_range(None, None).unwrap();
    assert!(range.is_unbounded());
    assert!(range.query_pairs().is_empty());
}

#[test]
fn test_blank_inputs_count_as_absent() {
    let range: DateRange = validate_date_range(Some(""), Some("  ")).unwrap();
    assert_eq!(range, DateRange::unbounded());
}

#[test]
fn test_valid_closed_range() {
    let range: DateRange = validate_date_range(Some("2024-05-01"), Some("2024-05-10")).unwrap();

    assert_eq!(range.start(), Some(date!(2024 - 05 - 01)));
    assert_eq!(range.end(), Some(date!(2024 - 05 - 10)));
    assert_eq!(
        range.query_pairs(),
        vec![
            ("start_date", String::from("2024-05-01")),
            ("end_date", String::from("2024-05-10")),
        ]
    );
}

#[test]
fn test_same_day_range_is_valid() {
    assert!(validate_date_range(Some("2024-05-10"), Some("2024-05-10")).is_ok());
}

#[test]
fn test_start_only_range() {
    let range: DateRange = validate_date_range(Some("2024-05-01"), None).unwrap();
    assert_eq!(
        range.query_pairs(),
        vec![("start_date", String::from("2024-05-01"))]
    );
}

#[test]
fn test_query_pairs_use_the_wire_format_not_the_raw_input() {
    let range: DateRange = validate_date_range(Some(" 2024-01-05 "), Some("2024-12-31")).unwrap();
    assert_eq!(
        range.query_pairs(),
        vec![
            ("start_date", String::from("2024-01-05")),
            ("end_date", String::from("2024-12-31")),
        ]
    );
}

#[test]
fn test_end_only_range() {
    let range: DateRange = validate_date_range(None, Some("2024-05-01")).unwrap();
    assert_eq!(range.query_pairs(), vec![("end_date", String::from("2024-05-01"))]);
}

#[test]
fn test_start_after_end_is_rejected() {
    let err: FilterError =
        validate_date_range(Some("2024-05-10"), Some("2024-05-01")).unwrap_err();

    assert_eq!(err.to_string(), "start date after end date");
    assert_eq!(
        err,
        FilterError::StartAfterEnd {
            start: date!(2024 - 05 - 10),
            end: date!(2024 - 05 - 01),
        }
    );
}

#[test]
fn test_malformed_start_is_rejected() {
    let err: FilterError = validate_date_range(Some("10/05/2024"), None).unwrap_err();
    assert_eq!(
        err,
        FilterError::MalformedDate {
            field: DateField::Start,
            value: String::from("10/05/2024"),
        }
    );
}

#[test]
fn test_impossible_calendar_date_is_malformed() {
    let err: FilterError = validate_date_range(None, Some("2024-02-30")).unwrap_err();
    assert_eq!(err.to_string(), "malformed date");
}

#[test]
fn test_malformed_takes_precedence_over_ordering() {
    let err: FilterError = validate_date_range(Some("2024-05-10"), Some("garbage")).unwrap_err();
    assert!(matches!(
        err,
        FilterError::MalformedDate {
            field: DateField::End,
            ..
        }
    ));
}
