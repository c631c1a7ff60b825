// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed descriptions of the API's collections.
//!
//! Each marker type ties an endpoint to its read model, its draft and the
//! payloads the draft produces. What a resource supports is expressed by
//! which traits it implements: requests can be created but never edited or
//! deleted from the console.

use helpdesk_domain::{
    Department, DepartmentDraft, DepartmentPayload, DomainError, EntityId, Identified, NewRequest,
    NewUser, Request, RequestDraft, User, UserChanges, UserDraft,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::transport::{ApiRequest, HttpMethod};

/// The collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `/api/users/`
    Users,
    /// `/api/departments/`
    Departments,
    /// `/api/requests/`
    Requests,
}

impl ResourceKind {
    /// Returns the collection path segment.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Departments => "departments",
            Self::Requests => "requests",
        }
    }

    /// Returns the lowercase singular noun used in messages.
    #[must_use]
    pub const fn singular(&self) -> &'static str {
        match self {
            Self::Users => "user",
            Self::Departments => "department",
            Self::Requests => "request",
        }
    }

    /// Returns the capitalized singular noun used in notices.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Users => "User",
            Self::Departments => "Department",
            Self::Requests => "Request",
        }
    }

    /// Builds a request against the collection endpoint.
    #[must_use]
    pub fn collection_request(&self, method: HttpMethod) -> ApiRequest {
        ApiRequest::new(method, &["api", self.collection()])
    }

    /// Builds a request against one entity's endpoint.
    #[must_use]
    pub fn item_request(&self, method: HttpMethod, id: &EntityId) -> ApiRequest {
        ApiRequest::new(method, &["api", self.collection(), id.value()])
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection())
    }
}

/// A collection that can be listed and created into.
pub trait Resource {
    /// Which endpoint this resource lives at.
    const KIND: ResourceKind;
    /// Read model served by the list endpoint.
    type Entity: DeserializeOwned + Identified + Clone + Send + Sync;
    /// Editable form state.
    type Draft: Clone + Default + Send + Sync;
    /// Body of the create call.
    type Create: Serialize + Send + Sync;

    /// Validates a draft and builds the create body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequiredField` if a required field is empty.
    fn create_payload(draft: &Self::Draft) -> Result<Self::Create, DomainError>;
}

/// A resource whose entities can be edited in place.
pub trait Editable: Resource {
    /// PUT for full replacement, PATCH for partial update.
    const UPDATE_METHOD: HttpMethod;
    /// Body of the update call.
    type Update: Serialize + Send + Sync;

    /// Validates a draft and builds the update body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RequiredField` if a required field is empty.
    fn update_payload(draft: &Self::Draft) -> Result<Self::Update, DomainError>;
}

/// A resource whose entities can be deleted.
pub trait Deletable: Resource {}

/// Console users.
#[derive(Debug, Clone, Copy)]
pub struct Users;

/// Departments.
#[derive(Debug, Clone, Copy)]
pub struct Departments;

/// Support requests ("informes").
#[derive(Debug, Clone, Copy)]
pub struct Requests;

impl Resource for Users {
    const KIND: ResourceKind = ResourceKind::Users;
    type Entity = User;
    type Draft = UserDraft;
    type Create = NewUser;

    fn create_payload(draft: &UserDraft) -> Result<NewUser, DomainError> {
        draft.create_payload()
    }
}

impl Editable for Users {
    const UPDATE_METHOD: HttpMethod = HttpMethod::Patch;
    type Update = UserChanges;

    fn update_payload(draft: &UserDraft) -> Result<UserChanges, DomainError> {
        draft.update_payload()
    }
}

impl Deletable for Users {}

impl Resource for Departments {
    const KIND: ResourceKind = ResourceKind::Departments;
    type Entity = Department;
    type Draft = DepartmentDraft;
    type Create = DepartmentPayload;

    fn create_payload(draft: &DepartmentDraft) -> Result<DepartmentPayload, DomainError> {
        draft.payload()
    }
}

impl Editable for Departments {
    const UPDATE_METHOD: HttpMethod = HttpMethod::Put;
    type Update = DepartmentPayload;

    fn update_payload(draft: &DepartmentDraft) -> Result<DepartmentPayload, DomainError> {
        draft.payload()
    }
}

impl Deletable for Departments {}

impl Resource for Requests {
    const KIND: ResourceKind = ResourceKind::Requests;
    type Entity = Request;
    type Draft = RequestDraft;
    type Create = NewRequest;

    fn create_payload(draft: &RequestDraft) -> Result<NewRequest, DomainError> {
        draft.create_payload()
    }
}
