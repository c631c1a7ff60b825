// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The users and departments management page.
//!
//! Each collection has a create form whose draft lives on the page, and an
//! edit dialog opened from a row of the current list.

use helpdesk_console::{CollectionStore, Confirmation, ModalSession, SessionError};
use helpdesk_domain::{Department, DepartmentDraft, EntityId, User, UserDraft};

use crate::console::Console;
use crate::coordinator::MutationOutcome;
use crate::error::ApiError;
use crate::resource::{Departments, Users};
use crate::transport::ApiTransport;

/// View state of the directory page.
#[derive(Debug)]
pub struct DirectoryPage<'c, T, C> {
    console: &'c Console<T, C>,
    users: CollectionStore<User>,
    departments: CollectionStore<Department>,
    new_user: UserDraft,
    new_department: DepartmentDraft,
    user_dialog: ModalSession<UserDraft>,
    department_dialog: ModalSession<DepartmentDraft>,
}

impl<'c, T, C> DirectoryPage<'c, T, C>
where
    T: ApiTransport + Sync,
    C: Confirmation + Sync,
{
    /// Creates the page with empty lists and forms.
    #[must_use]
    pub fn new(console: &'c Console<T, C>) -> Self {
        Self {
            console,
            users: CollectionStore::new("users"),
            departments: CollectionStore::new("departments"),
            new_user: UserDraft::default(),
            new_department: DepartmentDraft::default(),
            user_dialog: ModalSession::new(),
            department_dialog: ModalSession::new(),
        }
    }

    /// Returns the user store.
    #[must_use]
    pub const fn users(&self) -> &CollectionStore<User> {
        &self.users
    }

    /// Returns the department store.
    #[must_use]
    pub const fn departments(&self) -> &CollectionStore<Department> {
        &self.departments
    }

    /// Returns the edit-user dialog.
    #[must_use]
    pub const fn user_dialog(&self) -> &ModalSession<UserDraft> {
        &self.user_dialog
    }

    /// Returns the edit-department dialog.
    #[must_use]
    pub const fn department_dialog(&self) -> &ModalSession<DepartmentDraft> {
        &self.department_dialog
    }

    /// Fetches both lists concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first failure; each store records its own outcome.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let coordinator = self.console.coordinator();
        let (users, departments) = futures::join!(
            coordinator.refresh::<Users>(&mut self.users, &[]),
            coordinator.refresh::<Departments>(&mut self.departments, &[])
        );
        users.and(departments)
    }

    /// Fetches the user list only.
    ///
    /// # Errors
    ///
    /// Returns the list failure; the department store is untouched.
    pub async fn load_users(&mut self) -> Result<(), ApiError> {
        self.console
            .coordinator()
            .refresh::<Users>(&mut self.users, &[])
            .await
    }

    /// Fetches the department list only.
    ///
    /// # Errors
    ///
    /// Returns the list failure; the user store is untouched.
    pub async fn load_departments(&mut self) -> Result<(), ApiError> {
        self.console
            .coordinator()
            .refresh::<Departments>(&mut self.departments, &[])
            .await
    }

    /// Returns the create-user form for editing.
    pub const fn new_user_mut(&mut self) -> &mut UserDraft {
        &mut self.new_user
    }

    /// Returns the create-department form for editing.
    pub const fn new_department_mut(&mut self) -> &mut DepartmentDraft {
        &mut self.new_department
    }

    /// Submits the create-user form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidDraft` or the POST failure; the form keeps
    /// its contents.
    pub async fn create_user(&mut self) -> Result<MutationOutcome, ApiError> {
        self.console
            .coordinator()
            .create::<Users>(&mut self.users, &mut self.new_user, &[])
            .await
    }

    /// Submits the create-department form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidDraft` or the POST failure; the form keeps
    /// its contents.
    pub async fn create_department(&mut self) -> Result<MutationOutcome, ApiError> {
        self.console
            .coordinator()
            .create::<Departments>(&mut self.departments, &mut self.new_department, &[])
            .await
    }

    /// Opens the edit dialog for a listed user.
    ///
    /// Selecting another user while the dialog is open re-hydrates it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` if the user is not in the current list
    /// or a submission is in flight.
    pub fn edit_user(&mut self, id: &EntityId) -> Result<(), ApiError> {
        let user: &User = self
            .users
            .find(id)
            .ok_or_else(|| SessionError::TargetNotFound { id: id.clone() })?;
        self.user_dialog.open_editing(user)?;
        Ok(())
    }

    /// Opens the edit dialog for a listed department.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` if the department is not in the current
    /// list or a submission is in flight.
    pub fn edit_department(&mut self, id: &EntityId) -> Result<(), ApiError> {
        let department: &Department = self
            .departments
            .find(id)
            .ok_or_else(|| SessionError::TargetNotFound { id: id.clone() })?;
        self.department_dialog.open_editing(department)?;
        Ok(())
    }

    /// Returns the edit-user draft while the dialog is open.
    pub fn user_draft_mut(&mut self) -> Option<&mut UserDraft> {
        self.user_dialog.draft_mut()
    }

    /// Returns the edit-department draft while the dialog is open.
    pub fn department_draft_mut(&mut self) -> Option<&mut DepartmentDraft> {
        self.department_dialog.draft_mut()
    }

    /// Closes the edit-user dialog without saving.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` while a submission is in flight.
    pub fn cancel_user_edit(&mut self) -> Result<(), ApiError> {
        Ok(self.user_dialog.cancel()?)
    }

    /// Closes the edit-department dialog without saving.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` while a submission is in flight.
    pub fn cancel_department_edit(&mut self) -> Result<(), ApiError> {
        Ok(self.department_dialog.cancel()?)
    }

    /// Saves the edit-user dialog with PATCH.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session`, `ApiError::InvalidDraft` or the PATCH
    /// failure; the dialog stays open on failure.
    pub async fn save_user(&mut self) -> Result<MutationOutcome, ApiError> {
        self.console
            .coordinator()
            .submit_update::<Users>(&mut self.users, &mut self.user_dialog, &[])
            .await
    }

    /// Saves the edit-department dialog with PUT.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session`, `ApiError::InvalidDraft` or the PUT
    /// failure; the dialog stays open on failure.
    pub async fn save_department(&mut self) -> Result<MutationOutcome, ApiError> {
        self.console
            .coordinator()
            .submit_update::<Departments>(&mut self.departments, &mut self.department_dialog, &[])
            .await
    }

    /// Deletes a user after confirmation.
    ///
    /// # Errors
    ///
    /// Returns the DELETE failure; the list is left as it was.
    pub async fn delete_user(&mut self, id: &EntityId) -> Result<MutationOutcome, ApiError> {
        self.console
            .coordinator()
            .delete::<Users>(&mut self.users, id, &[])
            .await
    }

    /// Deletes a department after confirmation.
    ///
    /// # Errors
    ///
    /// Returns the DELETE failure; the list is left as it was.
    pub async fn delete_department(&mut self, id: &EntityId) -> Result<MutationOutcome, ApiError> {
        self.console
            .coordinator()
            .delete::<Departments>(&mut self.departments, id, &[])
            .await
    }
}
