// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_domain::{Department, EntityId, User};

pub fn create_test_department(id: &str, name: &str, director: Option<&str>) -> Department {
    Department {
        id: EntityId::new(id),
        name: String::from(name),
        director: director.map(String::from),
    }
}

pub fn create_test_user(id: &str, username: &str, is_staff: bool) -> User {
    User {
        id: EntityId::new(id),
        username: String::from(username),
        first_name: format!("{username}-first"),
        last_name: format!("{username}-last"),
        is_staff,
    }
}
