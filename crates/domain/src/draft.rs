// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drafts: editable, session-local copies of an entity's fields.
//!
//! A draft is always an owned copy. Hydrating one from an entity clones the
//! field values, so edits in progress never alias the list snapshot they
//! came from. Each draft knows how to build the JSON payloads its endpoints
//! accept and rejects empty required fields before anything is sent.

use serde::Serialize;

use crate::error::DomainError;
use crate::types::{Department, EntityId, User};
use crate::validation::require_non_empty;

/// Editable fields of a user.
///
/// The password is never hydrated from a read; it starts empty on every
/// open and an empty value means "leave unchanged" on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// New password, or empty.
    pub password: String,
}

/// Body of `POST /api/users/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    /// Login name.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Body of `PATCH /api/users/{id}/`.
///
/// `password` is omitted from the JSON entirely when unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserChanges {
    /// Login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Replacement password, only when the operator typed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: String::new(),
        }
    }
}

impl UserDraft {
    fn require_identity(&self) -> Result<(), DomainError> {
        require_non_empty("username", &self.username)?;
        require_non_empty("first_name", &self.first_name)?;
        require_non_empty("last_name", &self.last_name)
    }

    /// Builds the payload for creating a user.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequiredField` if the username, password,
    /// first name or last name is empty.
    pub fn create_payload(&self) -> Result<NewUser, DomainError> {
        self.require_identity()?;
        require_non_empty("password", &self.password)?;
        Ok(NewUser {
            username: self.username.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }

    /// Builds the payload for updating a user.
    ///
    /// The password is included verbatim if and only if it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequiredField` if the username, first name or
    /// last name is empty.
    pub fn update_payload(&self) -> Result<UserChanges, DomainError> {
        self.require_identity()?;
        let password: Option<String> = if self.password.is_empty() {
            None
        } else {
            Some(self.password.clone())
        };
        Ok(UserChanges {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password,
        })
    }
}

/// Editable fields of a department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentDraft {
    /// Department name.
    pub name: String,
    /// Director display name, or empty.
    pub director: String,
}

/// Body of `POST /api/departments/` and `PUT /api/departments/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentPayload {
    /// Department name.
    pub name: String,
    /// Director display name; `null` when left blank.
    pub director: Option<String>,
}

impl From<&Department> for DepartmentDraft {
    fn from(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            director: department.director.clone().unwrap_or_default(),
        }
    }
}

impl DepartmentDraft {
    /// Builds the payload used for both create and update.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequiredField` if the name is empty.
    pub fn payload(&self) -> Result<DepartmentPayload, DomainError> {
        require_non_empty("name", &self.name)?;
        let director: Option<String> = if self.director.trim().is_empty() {
            None
        } else {
            Some(self.director.clone())
        };
        Ok(DepartmentPayload {
            name: self.name.clone(),
            director,
        })
    }
}

/// Fields of the "new informe" dialog.
///
/// `department` and `technician` hold the identifiers picked from the
/// dialog's reference lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    /// Short subject line.
    pub subject: String,
    /// Problem description.
    pub description: String,
    /// Selected department identifier.
    pub department: String,
    /// Selected technician identifier.
    pub technician: String,
}

/// Body of `POST /api/requests/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRequest {
    /// Short subject line.
    pub subject: String,
    /// Problem description.
    pub description: String,
    /// Department reference.
    pub department: EntityId,
    /// Technician reference.
    pub technician: EntityId,
}

impl RequestDraft {
    /// Builds the payload for filing a request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequiredField` if any field is empty.
    pub fn create_payload(&self) -> Result<NewRequest, DomainError> {
        require_non_empty("subject", &self.subject)?;
        require_non_empty("description", &self.description)?;
        require_non_empty("department", &self.department)?;
        require_non_empty("technician", &self.technician)?;
        Ok(NewRequest {
            subject: self.subject.clone(),
            description: self.description.clone(),
            department: EntityId::new(&self.department),
            technician: EntityId::new(&self.technician),
        })
    }
}
