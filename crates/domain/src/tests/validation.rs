// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, require_non_empty};

#[test]
fn test_non_empty_value_passes() {
    assert!(require_non_empty("name", "IT").is_ok());
}

#[test]
fn test_empty_value_fails() {
    assert_eq!(
        require_non_empty("name", ""),
        Err(DomainError::RequiredField { field: "name" })
    );
}

#[test]
fn test_whitespace_only_value_fails() {
    assert!(require_non_empty("subject", "   \t").is_err());
}
