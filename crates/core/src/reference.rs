// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_domain::{Department, User, technicians};

/// Choice lists offered by the "new informe" dialog.
///
/// These are fetched fresh every time the dialog opens and are read-only;
/// they are not tied to any page's collection store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformeReferences {
    departments: Vec<Department>,
    technicians: Vec<User>,
}

impl InformeReferences {
    /// Builds the lists from freshly fetched departments and users.
    ///
    /// Staff users are filtered out of the technician list.
    #[must_use]
    pub fn new(departments: Vec<Department>, users: &[User]) -> Self {
        Self {
            departments,
            technicians: technicians(users),
        }
    }

    /// Returns the department choices.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Returns the technician choices.
    #[must_use]
    pub fn technicians(&self) -> &[User] {
        &self.technicians
    }
}
