// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle of a create or edit dialog.
//!
//! ```text
//! Closed --open--> Open(draft) --begin_submit--> Submitting
//!   ^                 |   ^                          |
//!   +-----cancel------+   +-------submit_failed------+
//!   +-------------------------submit_succeeded-------+
//! ```
//!
//! The draft exists only while the session is not `Closed` and is dropped
//! on every close. While `Submitting`, the draft is frozen and the dialog
//! cannot be cancelled, dismissed or re-targeted.

use helpdesk_domain::{EntityId, Identified};
use tracing::debug;

use crate::error::SessionError;

/// Phase of a dialog session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No dialog is shown.
    #[default]
    Closed,
    /// The dialog is shown and its draft is editable.
    Open,
    /// The draft has been dispatched and the dialog awaits the response.
    Submitting,
}

/// A snapshot of the session handed to the caller that performs the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<D> {
    /// The entity being edited, or `None` for a create dialog.
    pub target: Option<EntityId>,
    /// The draft as it was when submitted.
    pub draft: D,
}

/// State of one create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSession<D> {
    phase: SessionPhase,
    target: Option<EntityId>,
    draft: Option<D>,
    error: Option<String>,
}

impl<D> Default for ModalSession<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ModalSession<D> {
    /// Creates a closed session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::Closed,
            target: None,
            draft: None,
            error: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns whether the dialog is shown (open or submitting).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.phase, SessionPhase::Closed)
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, SessionPhase::Submitting)
    }

    /// Returns the entity being edited, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&EntityId> {
        self.target.as_ref()
    }

    /// Returns the draft while the dialog is shown.
    #[must_use]
    pub const fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    /// Returns the draft for editing.
    ///
    /// Returns `None` when closed or while submitting.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self.phase {
            SessionPhase::Open => self.draft.as_mut(),
            SessionPhase::Closed | SessionPhase::Submitting => None,
        }
    }

    /// Returns the message left by the last failed submission.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn ensure_not_submitting(&self) -> Result<(), SessionError> {
        if self.is_submitting() {
            return Err(SessionError::SubmitInProgress);
        }
        Ok(())
    }

    fn open_with(&mut self, target: Option<EntityId>, draft: D) {
        debug!(entity = ?target, "Dialog opened");
        self.phase = SessionPhase::Open;
        self.target = target;
        self.draft = Some(draft);
        self.error = None;
    }

    /// Opens the dialog for editing `entity`.
    ///
    /// The draft is rebuilt from the entity's current fields. Calling this
    /// while already open (for the same or another entity) replaces the
    /// draft entirely; nothing from the previous draft survives.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SubmitInProgress` while a submission is in
    /// flight.
    pub fn open_editing<E>(&mut self, entity: &E) -> Result<(), SessionError>
    where
        E: Identified,
        D: for<'a> From<&'a E>,
    {
        self.ensure_not_submitting()?;
        self.open_with(Some(entity.id().clone()), D::from(entity));
        Ok(())
    }

    /// Closes the dialog and discards the draft.
    ///
    /// Closing an already-closed dialog is a no-op. Used for the cancel
    /// button, the close icon, Escape and clicks outside the dialog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SubmitInProgress` while a submission is in
    /// flight.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_not_submitting()?;
        if self.is_active() {
            debug!(entity = ?self.target, "Dialog cancelled");
        }
        self.close();
        Ok(())
    }

    /// Freezes the draft and hands a copy to the caller for dispatch.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `SessionError::NotOpen` if the dialog is closed
    /// - `SessionError::SubmitInProgress` if already submitting
    pub fn begin_submit(&mut self) -> Result<Submission<D>, SessionError>
    where
        D: Clone,
    {
        match self.phase {
            SessionPhase::Closed => Err(SessionError::NotOpen),
            SessionPhase::Submitting => Err(SessionError::SubmitInProgress),
            SessionPhase::Open => {
                let draft: D = self.draft.clone().ok_or(SessionError::NotOpen)?;
                self.phase = SessionPhase::Submitting;
                self.error = None;
                Ok(Submission {
                    target: self.target.clone(),
                    draft,
                })
            }
        }
    }

    /// Returns to `Open` with the draft intact and an error message.
    ///
    /// Has no effect unless a submission is in flight.
    pub fn submit_failed(&mut self, message: String) {
        if self.is_submitting() {
            self.phase = SessionPhase::Open;
            self.error = Some(message);
        }
    }

    /// Closes the dialog after a successful write.
    ///
    /// Has no effect unless a submission is in flight.
    pub fn submit_succeeded(&mut self) {
        if self.is_submitting() {
            debug!(entity = ?self.target, "Dialog submitted");
            self.close();
        }
    }

    fn close(&mut self) {
        self.phase = SessionPhase::Closed;
        self.target = None;
        self.draft = None;
        self.error = None;
    }
}

impl<D: Default> ModalSession<D> {
    /// Opens the dialog for creating a new entity with an empty draft.
    ///
    /// Re-opening an open create dialog resets the draft.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SubmitInProgress` while a submission is in
    /// flight.
    pub fn open_create(&mut self) -> Result<(), SessionError> {
        self.ensure_not_submitting()?;
        self.open_with(None, D::default());
        Ok(())
    }
}
