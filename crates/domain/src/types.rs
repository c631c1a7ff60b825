// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// An opaque, server-assigned identifier.
///
/// The backend emits primary keys as JSON numbers, but the console never
/// interprets them: identifiers are normalized to their string form on the
/// way in and sent back verbatim in paths and foreign-key fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new `EntityId` from its string form.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier as served by the API
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Ok(Self(value)),
            RawId::Number(value) => Ok(Self(value.to_string())),
        }
    }
}

/// Entities that carry a server-assigned identifier.
pub trait Identified {
    /// Returns the entity's identifier.
    fn id(&self) -> &EntityId;
}

/// A console user, as listed by the API.
///
/// The password is write-only on the server and is therefore never part of
/// this read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The server-assigned identifier.
    pub id: EntityId,
    /// The unique login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Administrator flag. Users without it are technicians.
    pub is_staff: bool,
}

impl User {
    /// Returns the user's display name (`first last`).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns whether this user may be assigned to requests.
    #[must_use]
    pub const fn is_technician(&self) -> bool {
        !self.is_staff
    }
}

impl Identified for User {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A department that requests are filed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// The server-assigned identifier.
    pub id: EntityId,
    /// Department name.
    pub name: String,
    /// Display name of the department's director, if any.
    #[serde(default)]
    pub director: Option<String>,
}

impl Department {
    /// Returns the director for display, falling back to `N/A`.
    #[must_use]
    pub fn director_label(&self) -> &str {
        match self.director.as_deref() {
            Some(director) if !director.trim().is_empty() => director,
            _ => "N/A",
        }
    }
}

impl Identified for Department {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A support request ("informe"), as listed by the API.
///
/// Foreign references are expanded by the server into display names; the
/// raw identifiers are kept when the server includes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The server-assigned identifier.
    pub id: EntityId,
    /// Short subject line.
    pub subject: String,
    /// Free-form problem description.
    pub description: String,
    /// Identifier of the assigned department, when served.
    #[serde(default)]
    pub department: Option<EntityId>,
    /// Name of the assigned department.
    pub department_name: String,
    /// Identifier of the assigned technician, when served.
    #[serde(default)]
    pub technician: Option<EntityId>,
    /// Full name of the assigned technician.
    pub technician_full_name: String,
    /// Creation timestamp, assigned by the server.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Identified for Request {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Filters a user list down to the technicians eligible for assignment.
///
/// Order is preserved.
#[must_use]
pub fn technicians(users: &[User]) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.is_technician())
        .cloned()
        .collect()
}
