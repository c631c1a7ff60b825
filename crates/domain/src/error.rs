// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while turning a draft into a request payload.
///
/// These are detected locally, before anything is sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was left empty.
    RequiredField {
        /// The wire name of the field.
        field: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredField { field } => write!(f, "Field '{field}' is required"),
        }
    }
}

impl std::error::Error for DomainError {}
