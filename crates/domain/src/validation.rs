// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates that a form field carries a value.
///
/// Whitespace-only input counts as empty. The value itself is never
/// modified; callers send what the operator typed.
///
/// # Arguments
///
/// * `field` - The wire name of the field, used in the error
/// * `value` - The operator-supplied value
///
/// # Errors
///
/// Returns `DomainError::RequiredField` if the value is empty or blank.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::RequiredField { field });
    }
    Ok(())
}
