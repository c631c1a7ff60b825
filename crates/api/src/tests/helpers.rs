// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Mutex;

use helpdesk_console::{Confirmation, Notice};
use tokio::sync::broadcast;

use crate::Console;

use super::stub_backend::StubBackend;

pub type TestConsole = Console<StubBackend, ScriptedConfirmation>;

/// Answers every prompt with a fixed decision and remembers the prompts.
pub struct ScriptedConfirmation {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmation {
    pub const fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmation for ScriptedConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

/// A backend with one department (`1`, "IT", "Ana").
pub fn create_department_backend() -> StubBackend {
    let backend: StubBackend = StubBackend::new();
    backend.seed_department(1, "IT", Some("Ana"));
    backend
}

/// A backend with departments, an admin, two technicians and two
/// requests filed in May 2024.
pub fn create_populated_backend() -> StubBackend {
    let backend: StubBackend = StubBackend::new();
    backend.seed_department(1, "IT", Some("Ana"));
    backend.seed_department(3, "Facilities", None);
    backend.seed_user(5, "admin", "Ada", "Admin", true);
    backend.seed_user(7, "jperez", "Juan", "Perez", false);
    backend.seed_user(8, "mlopez", "Maria", "Lopez", false);
    backend.seed_request(10, "Monitor flicker", 1, 7, "2024-05-02T08:00:00Z");
    backend.seed_request(11, "Broken chair", 3, 8, "2024-05-20T15:30:00Z");
    backend
}

pub fn create_test_console(backend: StubBackend, answer: bool) -> TestConsole {
    Console::new(backend, ScriptedConfirmation::new(answer))
}

/// Drains every notice currently buffered for `rx`.
pub fn drain_notices(rx: &mut broadcast::Receiver<Notice>) -> Vec<Notice> {
    let mut notices: Vec<Notice> = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        notices.push(notice);
    }
    notices
}
