// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_domain::EntityId;

/// Errors raised when a dialog is driven out of order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The dialog is closed.
    NotOpen,
    /// A submission is in flight; the dialog cannot be changed or dismissed.
    SubmitInProgress,
    /// An edit was submitted without a target entity.
    MissingTarget,
    /// The entity to edit is not in the current list snapshot.
    TargetNotFound {
        /// The requested identifier.
        id: EntityId,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "The dialog is not open"),
            Self::SubmitInProgress => {
                write!(f, "A submission is in progress; wait for it to finish")
            }
            Self::MissingTarget => write!(f, "No entity is selected for editing"),
            Self::TargetNotFound { id } => {
                write!(f, "Entity '{id}' is not in the current list")
            }
        }
    }
}

impl std::error::Error for SessionError {}
