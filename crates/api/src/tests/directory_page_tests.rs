// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_console::{LoadStatus, SessionError, SessionPhase};
use helpdesk_domain::{DepartmentDraft, EntityId, UserDraft};
use serde_json::json;

use crate::{ApiError, DirectoryPage, HttpMethod, MutationOutcome};

use super::helpers::{
    ScriptedConfirmation, TestConsole, create_populated_backend, create_test_console,
};
use super::stub_backend::StubBackend;

type TestPage<'c> = DirectoryPage<'c, StubBackend, ScriptedConfirmation>;

async fn loaded_page(console: &TestConsole) -> TestPage<'_> {
    let mut page: TestPage<'_> = DirectoryPage::new(console);
    page.load().await.unwrap();
    console.client().transport().clear_calls();
    page
}

#[tokio::test]
async fn test_load_fills_both_collections() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page: TestPage<'_> = DirectoryPage::new(&console);

    page.load().await.unwrap();

    assert_eq!(page.users().status(), LoadStatus::Ready);
    assert_eq!(page.users().list().len(), 3);
    assert_eq!(page.departments().status(), LoadStatus::Ready);
    assert_eq!(page.departments().list().len(), 2);
}

#[tokio::test]
async fn test_load_records_failure_per_collection() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    console.client().transport().respond_next(500, "");
    let mut page: TestPage<'_> = DirectoryPage::new(&console);

    let result = page.load().await;

    assert!(result.is_err());
    assert_eq!(page.users().status(), LoadStatus::Failed);
    assert_eq!(page.departments().status(), LoadStatus::Ready);
}

#[tokio::test]
async fn test_loading_one_collection_ignores_the_other() {
    let backend: StubBackend = create_populated_backend();
    backend.fail_collection("departments", 500);
    let console: TestConsole = create_test_console(backend, true);
    let mut page: TestPage<'_> = DirectoryPage::new(&console);

    page.load_users().await.unwrap();

    assert_eq!(page.users().status(), LoadStatus::Ready);
    assert_eq!(page.users().list().len(), 3);
    assert_eq!(page.departments().status(), LoadStatus::Idle);
    let calls = console.client().transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path(), "/api/users/");

    let err: ApiError = page.load_departments().await.unwrap_err();

    assert!(matches!(err, ApiError::Server { status: Some(500), .. }));
    assert_eq!(page.departments().status(), LoadStatus::Failed);
    assert_eq!(page.users().list().len(), 3);
}

#[tokio::test]
async fn test_edit_user_hydrates_with_empty_password() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;

    page.edit_user(&EntityId::new("7")).unwrap();

    assert_eq!(page.user_dialog().phase(), SessionPhase::Open);
    assert_eq!(page.user_dialog().target(), Some(&EntityId::new("7")));
    assert_eq!(
        page.user_dialog().draft(),
        Some(&UserDraft {
            username: String::from("jperez"),
            first_name: String::from("Juan"),
            last_name: String::from("Perez"),
            password: String::new(),
        })
    );
}

#[tokio::test]
async fn test_selecting_another_user_rehydrates_draft() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;

    page.edit_user(&EntityId::new("7")).unwrap();
    let draft = page.user_draft_mut().unwrap();
    draft.first_name = String::from("Edited");
    draft.password = String::from("typed-but-abandoned");

    page.edit_user(&EntityId::new("8")).unwrap();
    assert_eq!(page.user_dialog().draft().unwrap().username, "mlopez");
    assert!(page.user_dialog().draft().unwrap().password.is_empty());

    page.edit_user(&EntityId::new("7")).unwrap();
    assert_eq!(page.user_dialog().draft().unwrap().first_name, "Juan");
    assert!(page.user_dialog().draft().unwrap().password.is_empty());
}

#[tokio::test]
async fn test_edit_unknown_user_is_refused() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;

    let err: ApiError = page.edit_user(&EntityId::new("404")).unwrap_err();

    assert_eq!(
        err,
        ApiError::Session(SessionError::TargetNotFound {
            id: EntityId::new("404")
        })
    );
    assert_eq!(page.user_dialog().phase(), SessionPhase::Closed);
}

#[tokio::test]
async fn test_save_user_without_password_omits_key() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    page.edit_user(&EntityId::new("7")).unwrap();
    page.user_draft_mut().unwrap().last_name = String::from("Perez Gil");

    let outcome = page.save_user().await.unwrap();

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(page.user_dialog().phase(), SessionPhase::Closed);
    let mutations = console.client().transport().mutation_calls();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].method, HttpMethod::Patch);
    assert_eq!(mutations[0].path(), "/api/users/7/");
    assert_eq!(
        mutations[0].body,
        Some(json!({
            "username": "jperez",
            "first_name": "Juan",
            "last_name": "Perez Gil",
        }))
    );
    let refreshed = page
        .users()
        .find(&EntityId::new("7"))
        .unwrap();
    assert_eq!(refreshed.last_name, "Perez Gil");
}

#[tokio::test]
async fn test_save_user_with_password_sends_it_verbatim() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    page.edit_user(&EntityId::new("8")).unwrap();
    page.user_draft_mut().unwrap().password = String::from(" n3w pass ");

    page.save_user().await.unwrap();

    let mutations = console.client().transport().mutation_calls();
    assert_eq!(
        mutations[0].body.as_ref().unwrap()["password"],
        json!(" n3w pass ")
    );
}

#[tokio::test]
async fn test_cancel_edit_sends_nothing() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    page.edit_department(&EntityId::new("1")).unwrap();
    page.department_draft_mut().unwrap().name = String::from("Renamed");

    page.cancel_department_edit().unwrap();

    assert_eq!(page.department_dialog().phase(), SessionPhase::Closed);
    assert!(page.department_dialog().draft().is_none());
    assert!(console.client().transport().calls().is_empty());
    assert_eq!(page.departments().list()[0].name, "IT");
}

#[tokio::test]
async fn test_failed_department_save_reopens_with_draft_and_error() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    page.edit_department(&EntityId::new("3")).unwrap();
    page.department_draft_mut().unwrap().director = String::from("Rosa");
    console.client().transport().unreachable_next();

    let err: ApiError = page.save_department().await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
    assert_eq!(page.department_dialog().phase(), SessionPhase::Open);
    assert_eq!(
        page.department_dialog().draft(),
        Some(&DepartmentDraft {
            name: String::from("Facilities"),
            director: String::from("Rosa"),
        })
    );
    assert_eq!(
        page.department_dialog().error(),
        Some("Error updating department: could not reach the server")
    );
    assert_eq!(page.departments().list()[1].director, None);
}

#[tokio::test]
async fn test_department_save_uses_put_and_refreshes() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    page.edit_department(&EntityId::new("3")).unwrap();
    page.department_draft_mut().unwrap().director = String::from("Rosa");

    page.save_department().await.unwrap();

    let calls = console.client().transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, HttpMethod::Put);
    assert_eq!(calls[0].path(), "/api/departments/3/");
    assert_eq!(calls[1].method, HttpMethod::Get);
    assert_eq!(
        page.departments().list()[1].director.as_deref(),
        Some("Rosa")
    );
}

#[tokio::test]
async fn test_create_user_requires_password() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    *page.new_user_mut() = UserDraft {
        username: String::from("nuevo"),
        first_name: String::from("Nuevo"),
        last_name: String::from("Tecnico"),
        password: String::new(),
    };

    let err: ApiError = page.create_user().await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidDraft(_)));
    assert!(console.client().transport().calls().is_empty());
    assert_eq!(page.new_user_mut().username, "nuevo");
}

#[tokio::test]
async fn test_create_user_lists_new_technician() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;
    *page.new_user_mut() = UserDraft {
        username: String::from("nuevo"),
        first_name: String::from("Nuevo"),
        last_name: String::from("Tecnico"),
        password: String::from("secret"),
    };

    page.create_user().await.unwrap();

    assert_eq!(*page.new_user_mut(), UserDraft::default());
    assert_eq!(page.users().list().len(), 4);
    let created = page.users().list().iter().find(|u| u.username == "nuevo").unwrap();
    assert!(created.is_technician());
}

#[tokio::test]
async fn test_delete_user_after_confirmation() {
    let console: TestConsole = create_test_console(create_populated_backend(), true);
    let mut page = loaded_page(&console).await;

    page.delete_user(&EntityId::new("8")).await.unwrap();

    assert_eq!(page.users().list().len(), 2);
    assert!(page.users().find(&EntityId::new("8")).is_none());
    assert_eq!(
        console.confirmation().prompts()[0],
        "Are you sure you want to delete this user? This action cannot be undone."
    );
}
